use crate::utils::error::{Result, ScaffoldError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 檔案系統不允許的字元 (以 Windows 為最嚴格基準)
const FILESYSTEM_RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Windows 保留的裝置名稱，加上副檔名也不能使用
const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// 對 Tcl 有特殊意義的字元，專案名稱會原樣寫入產生的腳本
const TCL_SIGNIFICANT: &[char] = &['[', ']', '{', '}', '$', ';', '#'];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 驗證專案名稱：不可為空，且必須能安全地作為目錄名稱與 Tcl 參數
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid = |reason: String| ScaffoldError::InvalidInput {
        field: "project name".to_string(),
        value: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty".to_string()));
    }

    if name == "." || name == ".." {
        return Err(invalid("name cannot be a relative path component".to_string()));
    }

    if let Some(c) = name.chars().find(|c| c.is_control()) {
        return Err(invalid(format!("contains control character {:?}", c)));
    }

    if let Some(c) = name.chars().find(|c| c.is_whitespace()) {
        return Err(invalid(format!("contains whitespace {:?}", c)));
    }

    if let Some(c) = name.chars().find(|c| FILESYSTEM_RESERVED.contains(c)) {
        return Err(invalid(format!("'{}' is not allowed in a directory name", c)));
    }

    if let Some(c) = name.chars().find(|c| TCL_SIGNIFICANT.contains(c)) {
        return Err(invalid(format!("'{}' has special meaning in Tcl", c)));
    }

    if name.ends_with('.') {
        return Err(invalid("name cannot end with '.'".to_string()));
    }

    let stem = name.split('.').next().unwrap_or(name);
    if WINDOWS_DEVICE_NAMES
        .iter()
        .any(|device| device.eq_ignore_ascii_case(stem))
    {
        return Err(invalid(format!("'{}' is a reserved device name on Windows", stem)));
    }

    Ok(())
}
