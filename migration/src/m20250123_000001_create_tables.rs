use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::ContactTeacherClass).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::GradeLevel).integer().not_null())
                    .col(ColumnDef::new(Students::HomeClass).string().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教学班表
        manager
            .create_table(
                Table::create()
                    .table(ClassGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassGroups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassGroups::Name).string().not_null())
                    .col(ColumnDef::new(ClassGroups::Subject).string().not_null())
                    .col(
                        ColumnDef::new(ClassGroups::GradeLevel)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassGroups::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassGroups::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassGroups::Table, ClassGroups::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教学班成员表
        manager
            .create_table(
                Table::create()
                    .table(ClassGroupStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassGroupStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassGroupStudents::ClassGroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassGroupStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassGroupStudents::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassGroupStudents::Table, ClassGroupStudents::ClassGroupId)
                            .to(ClassGroups::Table, ClassGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassGroupStudents::Table, ClassGroupStudents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建能力目标表
        manager
            .create_table(
                Table::create()
                    .table(CompetenceGoals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompetenceGoals::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CompetenceGoals::Subject).string().not_null())
                    .col(
                        ColumnDef::new(CompetenceGoals::GradeLevel)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompetenceGoals::Area).string().not_null())
                    .col(ColumnDef::new(CompetenceGoals::Code).string().not_null())
                    .col(
                        ColumnDef::new(CompetenceGoals::Description)
                            .text()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评估表
        manager
            .create_table(
                Table::create()
                    .table(Assessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assessments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assessments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessments::ClassGroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessments::CompetenceGoalId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Assessments::Date).big_integer().not_null())
                    .col(ColumnDef::new(Assessments::Grade).integer().null())
                    .col(
                        ColumnDef::new(Assessments::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Assessments::Description).text().null())
                    .col(
                        ColumnDef::new(Assessments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assessments::Table, Assessments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assessments::Table, Assessments::ClassGroupId)
                            .to(ClassGroups::Table, ClassGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assessments::Table, Assessments::CompetenceGoalId)
                            .to(CompetenceGoals::Table, CompetenceGoals::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建待办表
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tasks::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Tasks::Title).string().not_null())
                    .col(ColumnDef::new(Tasks::Description).text().null())
                    .col(ColumnDef::new(Tasks::Priority).string().not_null())
                    .col(ColumnDef::new(Tasks::DueDate).big_integer().null())
                    .col(
                        ColumnDef::new(Tasks::Done)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Tasks::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Tasks::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tasks::Table, Tasks::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_grade_level")
                    .table(Students::Table)
                    .col(Students::GradeLevel)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_home_class")
                    .table(Students::Table)
                    .col(Students::HomeClass)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_groups_teacher_id")
                    .table(ClassGroups::Table)
                    .col(ClassGroups::TeacherId)
                    .to_owned(),
            )
            .await?;

        // 同一学生在同一教学班只能出现一次
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_group_students_unique")
                    .table(ClassGroupStudents::Table)
                    .col(ClassGroupStudents::ClassGroupId)
                    .col(ClassGroupStudents::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_group_students_student_id")
                    .table(ClassGroupStudents::Table)
                    .col(ClassGroupStudents::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_competence_goals_subject_grade")
                    .table(CompetenceGoals::Table)
                    .col(CompetenceGoals::Subject)
                    .col(CompetenceGoals::GradeLevel)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assessments_student_id")
                    .table(Assessments::Table)
                    .col(Assessments::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assessments_class_group_id")
                    .table(Assessments::Table)
                    .col(Assessments::ClassGroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tasks_owner_id")
                    .table(Tasks::Table)
                    .col(Tasks::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assessments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CompetenceGoals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassGroupStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    Email,
    Role,
    ContactTeacherClass,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    GradeLevel,
    HomeClass,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClassGroups {
    #[sea_orm(iden = "class_groups")]
    Table,
    Id,
    Name,
    Subject,
    GradeLevel,
    TeacherId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClassGroupStudents {
    #[sea_orm(iden = "class_group_students")]
    Table,
    Id,
    ClassGroupId,
    StudentId,
    JoinedAt,
}

#[derive(DeriveIden)]
enum CompetenceGoals {
    #[sea_orm(iden = "competence_goals")]
    Table,
    Id,
    Subject,
    GradeLevel,
    Area,
    Code,
    Description,
}

#[derive(DeriveIden)]
enum Assessments {
    #[sea_orm(iden = "assessments")]
    Table,
    Id,
    StudentId,
    ClassGroupId,
    CompetenceGoalId,
    Date,
    Grade,
    IsPublished,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tasks {
    #[sea_orm(iden = "tasks")]
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    Priority,
    DueDate,
    Done,
    CreatedAt,
    UpdatedAt,
}
