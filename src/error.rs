// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Rejections raised at the input boundary, before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid amount: '{0}' is not a number")]
    InvalidAmount(String),
    #[error("Please enter a valid amount: {0} must be greater than zero")]
    NonPositiveAmount(String),
    #[error("Please enter a valid amount: {0} exceeds the 1,000,000,000,000 maximum")]
    AmountTooLarge(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unknown category '{0}' (expected one of: food, transport, entertainment, shopping, bills, health, other)")]
    UnknownCategory(String),
}
