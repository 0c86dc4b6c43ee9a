use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 urls 表
        manager
            .create_table(
                Table::create()
                    .table(Url::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Url::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Url::ShortPath).string_len(255).not_null())
                    .col(ColumnDef::new(Url::Destination).text().not_null())
                    .col(ColumnDef::new(Url::Title).string_len(500).null())
                    .col(ColumnDef::new(Url::Description).text().null())
                    .col(ColumnDef::new(Url::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(Url::ExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Url::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Url::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // short_path 唯一索引，冲突由数据库保证
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_urls_short_path")
                    .table(Url::Table)
                    .col(Url::ShortPath)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_urls_expires_at")
                    .table(Url::Table)
                    .col(Url::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_urls_created_at")
                    .table(Url::Table)
                    .col(Url::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_urls_created_at").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_urls_expires_at").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_urls_short_path").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Url::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Url {
    #[sea_orm(iden = "urls")]
    Table,
    Id,
    ShortPath,
    Destination,
    Title,
    Description,
    ImageUrl,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}
