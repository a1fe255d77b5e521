// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod doctor;
pub mod exporter;
pub mod preferences;
pub mod profile;
pub mod summary;
pub mod transactions;
