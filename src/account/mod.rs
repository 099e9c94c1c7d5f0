use anyhow::{anyhow, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// An employee record holding a running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    age: u32,
    balance: i64,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: u32, balance: i64) -> Self {
        Self {
            name: name.into(),
            age,
            balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Add `amount` to the balance.
    ///
    /// Negative amounts are accepted. Overflow wraps around without being
    /// reported; use [`Employee::checked_deposit`] to detect it.
    pub fn deposit(&mut self, amount: i64) {
        let previous = self.balance;
        self.balance = previous.wrapping_add(amount);
        debug!(
            "Deposited {} for {}: {} -> {}",
            amount, self.name, previous, self.balance
        );
    }

    /// Add `amount` to the balance, failing instead of wrapping on overflow.
    ///
    /// The balance is left untouched on error. Returns the new balance.
    pub fn checked_deposit(&mut self, amount: i64) -> Result<i64> {
        let Some(balance) = self.balance.checked_add(amount) else {
            trace!("Rejected deposit of {} for {}", amount, self.name);
            return Err(anyhow!(
                "Deposit of {} would overflow balance {} for {}",
                amount,
                self.balance,
                self.name
            ));
        };

        self.deposit(amount);
        Ok(balance)
    }

    /// Render the record as JSON, for diagnostics.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
