// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod setup;
pub mod overview;
pub mod goals;
pub mod bills;
pub mod subscriptions;
pub mod budgets;
pub mod expenses;
pub mod settings;
pub mod reports;
pub mod exporter;
