//! In-process loan ledger used by router and workflow tests

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::loans::LoanStore;
use crate::{
    error::AppResult,
    models::loan::{Loan, NewLoan},
};

#[derive(Default)]
pub struct MemoryLedger {
    loans: Mutex<Vec<Loan>>,
}

impl MemoryLedger {
    pub fn with_loans(loans: Vec<Loan>) -> Self {
        Self {
            loans: Mutex::new(loans),
        }
    }
}

#[async_trait]
impl LoanStore for MemoryLedger {
    async fn list_all(&self) -> AppResult<Vec<Loan>> {
        Ok(self.loans.lock().unwrap().clone())
    }

    async fn list_by_borrower(&self, user_email: &str) -> AppResult<Vec<Loan>> {
        Ok(self
            .loans
            .lock()
            .unwrap()
            .iter()
            .filter(|loan| loan.user_email == user_email)
            .cloned()
            .collect())
    }

    async fn exists(&self, user_email: &str, book_id: Uuid) -> AppResult<bool> {
        Ok(self
            .loans
            .lock()
            .unwrap()
            .iter()
            .any(|loan| loan.user_email == user_email && loan.book_id == book_id))
    }

    async fn insert(&self, loan: &NewLoan) -> AppResult<Option<Uuid>> {
        let mut loans = self.loans.lock().unwrap();
        if loans
            .iter()
            .any(|l| l.user_email == loan.user_email && l.book_id == loan.book_id)
        {
            return Ok(None);
        }
        let id = Uuid::new_v4();
        loans.push(Loan {
            id,
            user_email: loan.user_email.clone(),
            book_id: loan.book_id,
            borrowed_date: loan.borrowed_date,
            return_date: loan.return_date,
            details: loan.details.clone(),
        });
        Ok(Some(id))
    }

    async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let mut loans = self.loans.lock().unwrap();
        let before = loans.len();
        loans.retain(|loan| loan.id != id);
        Ok((before - loans.len()) as u64)
    }
}
