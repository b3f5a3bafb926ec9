use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Teacher,   // 教师
    Principal, // 校长
    Parent,    // 家长
    Student,   // 学生
}

impl UserRole {
    pub const TEACHER: &'static str = "TEACHER";
    pub const PRINCIPAL: &'static str = "PRINCIPAL";
    pub const PARENT: &'static str = "PARENT";
    pub const STUDENT: &'static str = "STUDENT";

    pub fn teacher_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher]
    }
    pub fn principal_roles() -> &'static [&'static UserRole] {
        &[&Self::Principal]
    }
    /// 教职工：可以查看学生数据
    pub fn staff_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Principal]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Principal, &Self::Parent, &Self::Student]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid user role: '{s}'. Supported roles: TEACHER, PRINCIPAL, PARENT, STUDENT"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Principal => write!(f, "{}", UserRole::PRINCIPAL),
            UserRole::Parent => write!(f, "{}", UserRole::PARENT),
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::PRINCIPAL => Ok(UserRole::Principal),
            UserRole::PARENT => Ok(UserRole::Parent),
            UserRole::STUDENT => Ok(UserRole::Student),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    // 担任联系教师（kontaktlærer）的班级，例如 "8A"
    pub contact_teacher_class: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 用户摘要（嵌入其他响应）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

// 创建用户（初始化数据使用）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub contact_teacher_class: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_string() {
        for role in UserRole::all_roles() {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(&parsed, *role);
        }
    }

    #[test]
    fn test_role_rejects_lowercase() {
        assert!("teacher".parse::<UserRole>().is_err());
        assert!(serde_json::from_str::<UserRole>("\"rektor\"").is_err());
    }

    #[test]
    fn test_staff_roles() {
        let staff = UserRole::staff_roles();
        assert!(staff.contains(&&UserRole::Teacher));
        assert!(staff.contains(&&UserRole::Principal));
        assert!(!staff.contains(&&UserRole::Parent));
    }
}
