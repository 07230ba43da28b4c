use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum BannerdError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    NotFound(String),
    Conflict(String),
    Serialization(String),
}

impl BannerdError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            BannerdError::DatabaseConfig(_) => "E001",
            BannerdError::DatabaseConnection(_) => "E002",
            BannerdError::DatabaseOperation(_) => "E003",
            BannerdError::Validation(_) => "E004",
            BannerdError::NotFound(_) => "E005",
            BannerdError::Conflict(_) => "E006",
            BannerdError::Serialization(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            BannerdError::DatabaseConfig(_) => "Database Configuration Error",
            BannerdError::DatabaseConnection(_) => "Database Connection Error",
            BannerdError::DatabaseOperation(_) => "Database Operation Error",
            BannerdError::Validation(_) => "Validation Error",
            BannerdError::NotFound(_) => "Resource Not Found",
            BannerdError::Conflict(_) => "Conflict",
            BannerdError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            BannerdError::DatabaseConfig(msg) => msg,
            BannerdError::DatabaseConnection(msg) => msg,
            BannerdError::DatabaseOperation(msg) => msg,
            BannerdError::Validation(msg) => msg,
            BannerdError::NotFound(msg) => msg,
            BannerdError::Conflict(msg) => msg,
            BannerdError::Serialization(msg) => msg,
        }
    }

    /// HTTP 状态码映射
    pub fn http_status(&self) -> StatusCode {
        match self {
            BannerdError::Validation(_) => StatusCode::BAD_REQUEST,
            BannerdError::NotFound(_) => StatusCode::NOT_FOUND,
            BannerdError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for BannerdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for BannerdError {}

// 便捷的构造函数
impl BannerdError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        BannerdError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        BannerdError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        BannerdError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        BannerdError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        BannerdError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        BannerdError::Conflict(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        BannerdError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for BannerdError {
    fn from(err: sea_orm::DbErr) -> Self {
        BannerdError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for BannerdError {
    fn from(err: std::io::Error) -> Self {
        BannerdError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for BannerdError {
    fn from(err: serde_json::Error) -> Self {
        BannerdError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BannerdError>;
