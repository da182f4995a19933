// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Serialize};

use crate::models::{Budget, Category, Expense};

pub const EXPENSES_KEY: &str = "expenses";
pub const BUDGETS_KEY: &str = "budgets";

/// Persistent get/replace-by-key primitive the record store is built on.
pub trait KvBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Backend over the `kv` table of an open database.
pub struct SqliteKv<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteKv<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl KvBackend for SqliteKv<'_> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()
            .with_context(|| format!("Read key '{}'", key))?;
        Ok(v)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv(key, value) VALUES(?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value",
                params![key, value],
            )
            .with_context(|| format!("Write key '{}'", key))?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A user intent that changes stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddExpense(Expense),
    UpdateExpense(Expense),
    DeleteExpense(String),
    SetBudget { category: Category, limit: Decimal },
}

/// The expense and budget collections, each kept whole under its own key.
///
/// Every mutation reads the full collection, changes it in memory and writes it
/// back in one `set`. Updates and deletes for unknown ids leave the collection
/// untouched.
pub struct RecordStore<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn into_inner(self) -> B {
        self.backend
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.backend.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Corrupt '{}' collection", key)),
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(key, &raw)
    }

    pub fn expenses(&self) -> Result<Vec<Expense>> {
        self.load(EXPENSES_KEY)
    }

    pub fn budgets(&self) -> Result<Vec<Budget>> {
        self.load(BUDGETS_KEY)
    }

    pub fn find_expense(&self, id: &str) -> Result<Option<Expense>> {
        Ok(self.expenses()?.into_iter().find(|e| e.id == id))
    }

    pub fn add_expense(&mut self, expense: Expense) -> Result<()> {
        let mut all = self.expenses()?;
        tracing::info!(id = %expense.id, category = %expense.category, amount = %expense.amount, "adding expense");
        all.push(expense);
        self.save(EXPENSES_KEY, &all)
    }

    /// Returns whether an expense with that id existed.
    pub fn update_expense(&mut self, expense: Expense) -> Result<bool> {
        let mut all = self.expenses()?;
        let Some(slot) = all.iter_mut().find(|e| e.id == expense.id) else {
            tracing::debug!(id = %expense.id, "update skipped, no such expense");
            return Ok(false);
        };
        tracing::info!(id = %expense.id, "updating expense");
        *slot = expense;
        self.save(EXPENSES_KEY, &all)?;
        Ok(true)
    }

    /// Returns whether an expense with that id existed.
    pub fn delete_expense(&mut self, id: &str) -> Result<bool> {
        let mut all = self.expenses()?;
        let before = all.len();
        all.retain(|e| e.id != id);
        if all.len() == before {
            tracing::debug!(id, "delete skipped, no such expense");
            return Ok(false);
        }
        tracing::info!(id, "deleted expense");
        self.save(EXPENSES_KEY, &all)?;
        Ok(true)
    }

    /// Replaces the limit of an existing budget or appends a new one.
    pub fn upsert_budget(&mut self, category: Category, limit: Decimal) -> Result<()> {
        let mut all = self.budgets()?;
        match all.iter_mut().find(|b| b.category == category) {
            Some(b) => b.limit = limit,
            None => all.push(Budget { category, limit }),
        }
        tracing::info!(%category, %limit, "budget set");
        self.save(BUDGETS_KEY, &all)
    }

    pub fn apply(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::AddExpense(e) => self.add_expense(e),
            Command::UpdateExpense(e) => self.update_expense(e).map(|_| ()),
            Command::DeleteExpense(id) => self.delete_expense(&id).map(|_| ()),
            Command::SetBudget { category, limit } => self.upsert_budget(category, limit),
        }
    }
}
