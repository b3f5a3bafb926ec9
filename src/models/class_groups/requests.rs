// 教学班列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClassGroupListQuery {
    pub teacher_id: Option<i64>,
}

// 创建教学班（初始化数据使用）
#[derive(Debug, Clone)]
pub struct CreateClassGroupRequest {
    pub name: String,
    pub subject: String,
    pub grade_level: i32,
    pub teacher_id: i64,
}
