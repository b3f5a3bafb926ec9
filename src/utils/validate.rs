use crate::models::assessments::entities::{MAX_GRADE, MIN_GRADE};

pub const MAX_TASK_TITLE_LENGTH: usize = 200;

/// 校验成绩等级（1–6）
pub fn validate_grade(grade: i32) -> Result<(), String> {
    if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
        return Err(format!(
            "Grade must be between {MIN_GRADE} and {MAX_GRADE}, got {grade}"
        ));
    }
    Ok(())
}

pub fn validate_task_title(title: &str) -> Result<(), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Task title must not be empty");
    }
    if title.chars().count() > MAX_TASK_TITLE_LENGTH {
        return Err("Task title must be at most 200 characters");
    }
    Ok(())
}
