use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::models::User;

// -- 字段名到校验错误消息列表的映射，作为 400 响应体原样序列化
// -- 使用 BTreeMap 保证字段顺序稳定
pub type FieldErrors = BTreeMap<String, Vec<String>>;

// -- 通用响应结构（非字段级错误时使用）
#[derive(Debug, Serialize)]
pub struct Response {
    pub status: &'static str,
    pub message: String,
}

// -- 用户的 JSON 线上表示：{id, name, age}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
        }
    }
}

/// 创建/整体更新用户的请求体 -- POST 与 PUT 共用同一份校验契约
///
/// # 字段
/// - `name` -- 必填，非空字符串，最长 100 个字符
/// - `age` -- 必填，必须是 JSON 整数
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveUserDto {
    #[validate(length(
        max = 100,
        message = "Ensure this field has no more than 100 characters."
    ))]
    pub name: String,
    pub age: i64,
}

impl SaveUserDto {
    /// 从原始 JSON 值逐字段解析并校验请求体
    ///
    /// 类型错误（age 不是整数、name 不是字符串）无法通过强类型反序列化
    /// 表达为字段级错误，所以这里对每个字段单独检查存在性和类型，
    /// 再交给 `validate()` 做长度约束，最后合并成统一的字段错误映射。
    ///
    /// # 返回
    /// - `Ok(SaveUserDto)` -- 所有字段存在且类型、约束均合法
    /// - `Err(FieldErrors)` -- 字段名到错误消息列表的映射，任何字段出错都不会写库
    pub fn from_value(body: &Value) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = match body.get("name") {
            None | Some(Value::Null) => {
                push_error(&mut errors, "name", "This field is required.");
                None
            }
            Some(Value::String(name)) => {
                if name.is_empty() {
                    push_error(&mut errors, "name", "This field may not be blank.");
                    None
                } else {
                    Some(name.clone())
                }
            }
            Some(_) => {
                push_error(&mut errors, "name", "Not a valid string.");
                None
            }
        };

        let age = match body.get("age") {
            None | Some(Value::Null) => {
                push_error(&mut errors, "age", "This field is required.");
                None
            }
            // -- 只接受 JSON 整数；布尔、浮点、字符串一律拒绝
            Some(value) => match value.as_i64() {
                Some(age) => Some(age),
                None => {
                    push_error(&mut errors, "age", "A valid integer is required.");
                    None
                }
            },
        };

        match (name, age) {
            (Some(name), Some(age)) if errors.is_empty() => {
                let dto = Self { name, age };
                dto.validate().map_err(field_errors_from_validation)?;
                Ok(dto)
            }
            _ => Err(errors),
        }
    }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

// -- 把 validator 的错误结构展平成字段错误映射
fn field_errors_from_validation(errors: ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_payload_parses() {
        let dto = SaveUserDto::from_value(&json!({"name": "Alice", "age": 30})).unwrap();
        assert_eq!(dto.name, "Alice");
        assert_eq!(dto.age, 30);
    }

    #[test]
    fn missing_fields_are_required() {
        let errors = SaveUserDto::from_value(&json!({})).unwrap_err();
        assert_eq!(errors["name"], vec!["This field is required."]);
        assert_eq!(errors["age"], vec!["This field is required."]);
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = SaveUserDto::from_value(&json!({"name": "", "age": 1})).unwrap_err();
        assert_eq!(errors["name"], vec!["This field may not be blank."]);
        assert!(!errors.contains_key("age"));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let name = "x".repeat(101);
        let errors = SaveUserDto::from_value(&json!({"name": name, "age": 1})).unwrap_err();
        assert_eq!(
            errors["name"],
            vec!["Ensure this field has no more than 100 characters."]
        );

        // -- 恰好 100 个字符仍然合法
        let name = "x".repeat(100);
        assert!(SaveUserDto::from_value(&json!({"name": name, "age": 1})).is_ok());
    }

    #[test]
    fn non_integer_age_is_rejected() {
        for bad_age in [json!("25"), json!(2.5), json!(true), json!([1])] {
            let errors =
                SaveUserDto::from_value(&json!({"name": "Bob", "age": bad_age})).unwrap_err();
            assert_eq!(errors["age"], vec!["A valid integer is required."]);
        }
    }

    #[test]
    fn non_string_name_is_rejected() {
        let errors = SaveUserDto::from_value(&json!({"name": 42, "age": 1})).unwrap_err();
        assert_eq!(errors["name"], vec!["Not a valid string."]);
    }

    #[test]
    fn non_object_body_reports_both_fields() {
        let errors = SaveUserDto::from_value(&json!([1, 2, 3])).unwrap_err();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("age"));
    }
}
