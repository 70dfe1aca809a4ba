use crate::account::Account;
use crate::error::TellerError;

/// Owns every account record; all mutation goes through borrows handed out
/// here, so an update is always observable on the next lookup.
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Rejects rosters that carry the same id twice.
    pub fn new(accounts: Vec<Account>) -> Result<Self, TellerError> {
        for (at, account) in accounts.iter().enumerate() {
            if accounts[..at].iter().any(|seen| seen.id == account.id) {
                return Err(TellerError::DuplicateAccount(account.id));
            }
        }
        Ok(AccountStore { accounts })
    }

    #[inline]
    pub fn lookup(&self, id: u32) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    #[inline]
    pub fn lookup_mut(&mut self, id: u32) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// Resolves two distinct ids to disjoint mutable borrows. Ids are unique
    /// for the store's lifetime, so equal ids mean the identical record.
    pub fn lookup_pair_mut(
        &mut self,
        first: u32,
        second: u32,
    ) -> Result<(&mut Account, &mut Account), TellerError> {
        if first == second {
            return Err(TellerError::SameAccount);
        }

        let first_at = self
            .position(first)
            .ok_or(TellerError::AccountNotFound(first))?;
        let second_at = self
            .position(second)
            .ok_or(TellerError::AccountNotFound(second))?;

        if first_at < second_at {
            let (head, tail) = self.accounts.split_at_mut(second_at);
            Ok((&mut head[first_at], &mut tail[0]))
        } else {
            let (head, tail) = self.accounts.split_at_mut(first_at);
            Ok((&mut tail[0], &mut head[second_at]))
        }
    }

    #[inline]
    fn position(&self, id: u32) -> Option<usize> {
        self.accounts.iter().position(|account| account.id == id)
    }

    #[inline]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
