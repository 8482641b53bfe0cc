//! Mock I2C implementation for testing

use crate::platform::{
    traits::{I2cConfig, I2cInterface},
    Result,
};
use core::cell::RefCell;
use std::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Read transaction
    Read { addr: u8, len: usize },
}

/// Mock I2C implementation
///
/// Records all transactions for test verification and allows pre-programming
/// read data. Reads consume the programmed bytes front-to-back; once they are
/// exhausted the caller's buffer is left zeroed.
#[derive(Debug)]
pub struct MockI2c {
    config: I2cConfig,
    transactions: RefCell<Vec<I2cTransaction>>,
    read_data: RefCell<Vec<u8>>,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            transactions: RefCell::new(Vec::new()),
            read_data: RefCell::new(Vec::new()),
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.borrow().clone()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.borrow_mut().clear();
    }

    /// Set data to return for read operations
    pub fn set_read_data(&mut self, data: &[u8]) {
        *self.read_data.borrow_mut() = data.to_vec();
    }

    /// Get configured frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }
}

impl I2cInterface for MockI2c {
    async fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.transactions.borrow_mut().push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        });
        Ok(())
    }

    async fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.transactions.borrow_mut().push(I2cTransaction::Read {
            addr,
            len: buffer.len(),
        });

        let mut read_data = self.read_data.borrow_mut();
        let to_read = core::cmp::min(buffer.len(), read_data.len());
        buffer[..to_read].copy_from_slice(&read_data[..to_read]);
        read_data.drain(..to_read);

        Ok(())
    }
}
