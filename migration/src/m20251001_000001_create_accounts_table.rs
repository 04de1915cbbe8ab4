use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Accounts::Email).string_len(320).not_null())
                    .col(
                        ColumnDef::new(Accounts::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::Status)
                            .string_len(24)
                            .not_null()
                            .default("Pending"),
                    )
                    .col(ColumnDef::new(Accounts::Role).integer().not_null())
                    // Personal
                    .col(text_col(Accounts::FirstName, 64))
                    .col(text_col(Accounts::LastName, 64))
                    .col(text_col(Accounts::Gender, 16))
                    .col(text_col(Accounts::PhoneNumber, 30))
                    .col(ColumnDef::new(Accounts::DateOfBirth).date().null())
                    .col(text_col(Accounts::WechatId, 64))
                    .col(text_col(Accounts::Languages, 255))
                    .col(text_col(Accounts::Occupation, 128))
                    .col(text_col(Accounts::Religion, 64))
                    .col(ColumnDef::new(Accounts::HeightCm).integer().null())
                    .col(ColumnDef::new(Accounts::WeightKg).integer().null())
                    .col(text_col(Accounts::MaritalStatus, 24))
                    .col(ColumnDef::new(Accounts::NoChildren).integer().null())
                    // Address
                    .col(text_col(Accounts::CountryCode, 16))
                    .col(text_col(Accounts::StateCode, 16))
                    .col(text_col(Accounts::CityCode, 16))
                    .col(text_col(Accounts::DistrictCode, 16))
                    .col(text_col(Accounts::StreetAddress, 255))
                    .col(text_col(Accounts::PostalCode, 32))
                    .col(
                        ColumnDef::new(Accounts::ProfileCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // One-time code
                    .col(text_col(Accounts::OtpCode, 6))
                    .col(
                        ColumnDef::new(Accounts::OtpIssuedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Accounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Case-insensitive uniqueness; concurrent registrations race on this index.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_accounts_email_lower
                ON accounts (lower(email));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_accounts_unverified
                ON accounts (id)
                WHERE status IN ('Registered', 'Pending');
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_accounts_email_lower;
                DROP INDEX IF EXISTS idx_accounts_unverified;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

fn text_col(column: Accounts, len: u32) -> ColumnDef {
    ColumnDef::new(column)
        .string_len(len)
        .not_null()
        .default("")
        .to_owned()
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Email,
    PasswordHash,
    Status,
    Role,
    FirstName,
    LastName,
    Gender,
    PhoneNumber,
    DateOfBirth,
    WechatId,
    Languages,
    Occupation,
    Religion,
    HeightCm,
    WeightKg,
    MaritalStatus,
    NoChildren,
    CountryCode,
    StateCode,
    CityCode,
    DistrictCode,
    StreetAddress,
    PostalCode,
    ProfileCompleted,
    OtpCode,
    OtpIssuedAt,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
