// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义地点查询的状态码、提取结果和对外检查结果
pub mod place_check;
