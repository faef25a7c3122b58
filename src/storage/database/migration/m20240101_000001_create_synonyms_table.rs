use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Synonyms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Synonyms::WordId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Synonyms::Word).string_len(255).not_null())
                    .col(ColumnDef::new(Synonyms::Synonyms).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Synonyms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Synonyms {
    Table,
    WordId,
    Word,
    Synonyms,
}
