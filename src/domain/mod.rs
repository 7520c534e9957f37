// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：状态码、提取结果和检查结果
/// - 服务（services）：响应提取引擎与域名匹配
///
/// 提取引擎是纯计算逻辑，不做任何 I/O，可以直接用合成的响应文本测试。
pub mod models;
pub mod services;
