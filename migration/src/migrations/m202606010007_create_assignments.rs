use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202606010007_create_assignments"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // class_students
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("class_students"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("student_id"))
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("class_id")).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(Alias::new("student_id"))
                            .col(Alias::new("class_id")),
                    )
                    .to_owned(),
            )
            .await?;

        // class_professors
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("class_professors"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("username")).string().not_null())
                    .col(ColumnDef::new(Alias::new("class_id")).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(Alias::new("username"))
                            .col(Alias::new("class_id")),
                    )
                    .to_owned(),
            )
            .await?;

        // session_students
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("session_students"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("student_id"))
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("session_id"))
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Alias::new("student_id"))
                            .col(Alias::new("session_id")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("session_students"))
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("class_professors"))
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("class_students")).to_owned())
            .await
    }
}
