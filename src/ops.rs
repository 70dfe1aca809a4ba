use rust_decimal::Decimal;

use crate::account::Account;
use crate::error::TellerError;

/// Read-only view of one account at the time of the inquiry.
pub struct Snapshot {
    pub id: u32,
    pub holder: String,
    pub balance: Decimal,
}

/// Both balances after a completed transfer.
pub struct TransferReceipt {
    pub source_balance: Decimal,
    pub destination_balance: Decimal,
}

#[inline]
pub fn inquire(account: &Account) -> Snapshot {
    Snapshot {
        id: account.id,
        holder: account.holder.clone(),
        balance: account.balance,
    }
}

pub fn deposit(account: &mut Account, amount: Decimal) -> Result<Decimal, TellerError> {
    if amount <= Decimal::ZERO {
        return Err(TellerError::InvalidAmount);
    }
    account.balance += amount;
    Ok(account.balance)
}

pub fn withdraw(account: &mut Account, amount: Decimal) -> Result<Decimal, TellerError> {
    if amount <= Decimal::ZERO {
        return Err(TellerError::InvalidAmount);
    }
    // amount == balance is a valid full withdrawal
    if amount > account.balance {
        return Err(TellerError::InsufficientFunds);
    }
    account.balance -= amount;
    Ok(account.balance)
}

/// Debits `source` and credits `destination` by `amount`, or changes neither.
/// Both borrows are exclusive and disjoint for the full call, so no partial
/// state is ever observable.
pub fn transfer(
    source: &mut Account,
    destination: &mut Account,
    amount: Decimal,
) -> Result<TransferReceipt, TellerError> {
    if amount <= Decimal::ZERO {
        return Err(TellerError::InvalidAmount);
    }
    if amount > source.balance {
        return Err(TellerError::InsufficientFunds);
    }

    source.balance -= amount;
    destination.balance += amount;

    Ok(TransferReceipt {
        source_balance: source.balance,
        destination_balance: destination.balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_inquire_reports_current_state() {
        let account = Account {
            id: 1,
            holder: "Alejandro".to_string(),
            balance: dec!(1500.0),
        };

        let snapshot = inquire(&account);
        assert_eq!(snapshot.id, 1);
        assert_eq!(snapshot.holder, "Alejandro");
        assert_eq!(snapshot.balance, dec!(1500.0));
    }

    #[test]
    fn test_deposit_increases_balance_by_exact_amount() {
        let mut account = Account {
            id: 1,
            holder: "Alejandro".to_string(),
            balance: dec!(1500.0),
        };

        let balance = deposit(&mut account, dec!(100.0)).unwrap();
        assert_eq!(balance, dec!(1600.0));
        assert_eq!(account.balance, dec!(1600.0));
    }

    #[test]
    fn test_deposit_has_no_upper_bound() {
        let mut account = Account {
            id: 1,
            holder: "Alejandro".to_string(),
            balance: dec!(0.0),
        };

        let balance = deposit(&mut account, dec!(1000000000.0)).unwrap();
        assert_eq!(balance, dec!(1000000000.0));
    }

    #[test]
    fn test_deposit_rejects_zero_and_negative_amounts() {
        let mut account = Account {
            id: 1,
            holder: "Alejandro".to_string(),
            balance: dec!(1500.0),
        };

        let result = deposit(&mut account, dec!(0.0));
        assert!(matches!(result, Err(TellerError::InvalidAmount)));

        let result = deposit(&mut account, dec!(-10.0));
        assert!(matches!(result, Err(TellerError::InvalidAmount)));

        assert_eq!(account.balance, dec!(1500.0), "Balance must be untouched");
    }

    #[test]
    fn test_withdraw_decreases_balance_by_exact_amount() {
        let mut account = Account {
            id: 3,
            holder: "Carlos".to_string(),
            balance: dec!(800.0),
        };

        let balance = withdraw(&mut account, dec!(300.0)).unwrap();
        assert_eq!(balance, dec!(500.0));
        assert_eq!(account.balance, dec!(500.0));
    }

    #[test]
    fn test_withdraw_exact_balance_succeeds() {
        let mut account = Account {
            id: 3,
            holder: "Carlos".to_string(),
            balance: dec!(800.0),
        };

        let balance = withdraw(&mut account, dec!(800.0)).unwrap();
        assert_eq!(balance, dec!(0.0));
    }

    #[test]
    fn test_withdraw_insufficient_funds_leaves_balance_unchanged() {
        let mut account = Account {
            id: 3,
            holder: "Carlos".to_string(),
            balance: dec!(0.0),
        };

        let result = withdraw(&mut account, dec!(1.0));
        assert!(matches!(result, Err(TellerError::InsufficientFunds)));
        assert_eq!(account.balance, dec!(0.0));
    }

    #[test]
    fn test_withdraw_rejects_zero_and_negative_amounts() {
        let mut account = Account {
            id: 3,
            holder: "Carlos".to_string(),
            balance: dec!(800.0),
        };

        let result = withdraw(&mut account, dec!(0.0));
        assert!(matches!(result, Err(TellerError::InvalidAmount)));

        let result = withdraw(&mut account, dec!(-800.0));
        assert!(matches!(result, Err(TellerError::InvalidAmount)));

        assert_eq!(account.balance, dec!(800.0));
    }

    #[test]
    fn test_transfer_moves_exact_amount_and_conserves_total() {
        let mut source = Account {
            id: 2,
            holder: "Maria".to_string(),
            balance: dec!(2500.0),
        };
        let mut destination = Account {
            id: 1,
            holder: "Alejandro".to_string(),
            balance: dec!(1500.0),
        };
        let total_before = source.balance + destination.balance;

        let receipt = transfer(&mut source, &mut destination, dec!(500.0)).unwrap();
        assert_eq!(receipt.source_balance, dec!(2000.0));
        assert_eq!(receipt.destination_balance, dec!(2000.0));
        assert_eq!(source.balance + destination.balance, total_before);
    }

    #[test]
    fn test_transfer_exact_balance_empties_source() {
        let mut source = Account {
            id: 3,
            holder: "Carlos".to_string(),
            balance: dec!(800.0),
        };
        let mut destination = Account {
            id: 1,
            holder: "Alejandro".to_string(),
            balance: dec!(1500.0),
        };

        let receipt = transfer(&mut source, &mut destination, dec!(800.0)).unwrap();
        assert_eq!(receipt.source_balance, dec!(0.0));
        assert_eq!(receipt.destination_balance, dec!(2300.0));
    }

    #[test]
    fn test_transfer_insufficient_funds_changes_neither_balance() {
        let mut source = Account {
            id: 3,
            holder: "Carlos".to_string(),
            balance: dec!(800.0),
        };
        let mut destination = Account {
            id: 1,
            holder: "Alejandro".to_string(),
            balance: dec!(1500.0),
        };

        let result = transfer(&mut source, &mut destination, dec!(800.01));
        assert!(matches!(result, Err(TellerError::InsufficientFunds)));
        assert_eq!(source.balance, dec!(800.0));
        assert_eq!(destination.balance, dec!(1500.0));
    }

    #[test]
    fn test_transfer_rejects_zero_and_negative_amounts() {
        let mut source = Account {
            id: 2,
            holder: "Maria".to_string(),
            balance: dec!(2500.0),
        };
        let mut destination = Account {
            id: 1,
            holder: "Alejandro".to_string(),
            balance: dec!(1500.0),
        };

        let result = transfer(&mut source, &mut destination, dec!(0.0));
        assert!(matches!(result, Err(TellerError::InvalidAmount)));

        let result = transfer(&mut source, &mut destination, dec!(-500.0));
        assert!(matches!(result, Err(TellerError::InvalidAmount)));

        assert_eq!(source.balance, dec!(2500.0));
        assert_eq!(destination.balance, dec!(1500.0));
    }
}
