use std::fmt;
use std::fmt::Display;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::TellerError;
use crate::ops;
use crate::ops::{Snapshot, TransferReceipt};
use crate::store::AccountStore;

/// Id-based entry points over the store: resolve the account(s), apply the
/// operation, pass the outcome through untouched.
pub struct Teller {
    store: AccountStore,
}

impl Teller {
    pub fn new(store: AccountStore) -> Self {
        Teller { store }
    }

    pub fn inquire(&self, id: u32) -> Result<Snapshot, TellerError> {
        let account = self
            .store
            .lookup(id)
            .ok_or(TellerError::AccountNotFound(id))?;
        Ok(ops::inquire(account))
    }

    pub fn deposit(&mut self, id: u32, amount: Decimal) -> Result<Decimal, TellerError> {
        let account = self
            .store
            .lookup_mut(id)
            .ok_or(TellerError::AccountNotFound(id))?;

        let balance = ops::deposit(account, amount)
            .inspect_err(|e| warn!(id, %amount, error = %e, "deposit rejected"))?;
        debug!(id, %amount, %balance, "deposit applied");
        Ok(balance)
    }

    pub fn withdraw(&mut self, id: u32, amount: Decimal) -> Result<Decimal, TellerError> {
        let account = self
            .store
            .lookup_mut(id)
            .ok_or(TellerError::AccountNotFound(id))?;

        let balance = ops::withdraw(account, amount)
            .inspect_err(|e| warn!(id, %amount, error = %e, "withdrawal rejected"))?;
        debug!(id, %amount, %balance, "withdrawal applied");
        Ok(balance)
    }

    pub fn transfer(
        &mut self,
        from: u32,
        to: u32,
        amount: Decimal,
    ) -> Result<TransferReceipt, TellerError> {
        let (source, destination) = self
            .store
            .lookup_pair_mut(from, to)
            .inspect_err(|e| warn!(from, to, error = %e, "transfer rejected"))?;

        let receipt = ops::transfer(source, destination, amount)
            .inspect_err(|e| warn!(from, to, %amount, error = %e, "transfer rejected"))?;
        debug!(from, to, %amount, "transfer applied");
        Ok(receipt)
    }
}

impl Display for Teller {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "id, holder, balance")?;

        for account in self.store.accounts() {
            writeln!(
                f,
                "{}, {}, {:.2}",
                account.id, account.holder, account.balance
            )?;
        }
        Ok(())
    }
}
