// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod check_api_test;
pub mod health_check;
pub mod real_fetcher_test;
