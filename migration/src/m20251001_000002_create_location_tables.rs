use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const COUNTRIES: &[&[&str]] = &[
    &["AU", "Australia"],
    &["CA", "Canada"],
    &["CN", "China"],
    &["DE", "Germany"],
    &["FR", "France"],
    &["IN", "India"],
    &["JP", "Japan"],
    &["KR", "South Korea"],
    &["UK", "United Kingdom"],
    &["US", "United States"],
];

const STATES: &[&[&str]] = &[
    &["CA", "ON", "Ontario"],
    &["CA", "QC", "Quebec"],
    &["CN", "BJ", "Beijing"],
    &["CN", "GD", "Guangdong"],
    &["CN", "SH", "Shanghai"],
    &["UK", "ENG", "England"],
    &["UK", "SCT", "Scotland"],
    &["US", "CA", "California"],
    &["US", "NY", "New York"],
    &["US", "TX", "Texas"],
];

const CITIES: &[&[&str]] = &[
    &["CN", "BJ", "BJ", "Beijing"],
    &["CN", "GD", "GZ", "Guangzhou"],
    &["CN", "GD", "SZ", "Shenzhen"],
    &["CN", "SH", "SH", "Shanghai"],
    &["US", "CA", "LA", "Los Angeles"],
    &["US", "CA", "SF", "San Francisco"],
    &["US", "NY", "NYC", "New York City"],
];

const DISTRICTS: &[&[&str]] = &[
    &["CN", "BJ", "BJ", "CY", "Chaoyang"],
    &["CN", "BJ", "BJ", "HD", "Haidian"],
    &["CN", "GD", "GZ", "TH", "Tianhe"],
    &["CN", "GD", "SZ", "FT", "Futian"],
    &["CN", "GD", "SZ", "LH", "Luohu"],
    &["CN", "GD", "SZ", "NS", "Nanshan"],
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Countries::Code)
                            .string_len(16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Countries::Name).string_len(64).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(States::Table)
                    .if_not_exists()
                    .col(code_col(States::CountryCode))
                    .col(code_col(States::Code))
                    .col(ColumnDef::new(States::Name).string_len(64).not_null())
                    .primary_key(Index::create().col(States::CountryCode).col(States::Code))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_states_country")
                            .from(States::Table, States::CountryCode)
                            .to(Countries::Table, Countries::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cities::Table)
                    .if_not_exists()
                    .col(code_col(Cities::CountryCode))
                    .col(code_col(Cities::StateCode))
                    .col(code_col(Cities::Code))
                    .col(ColumnDef::new(Cities::Name).string_len(64).not_null())
                    .primary_key(
                        Index::create()
                            .col(Cities::CountryCode)
                            .col(Cities::StateCode)
                            .col(Cities::Code),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cities_state")
                            .from_tbl(Cities::Table)
                            .from_col(Cities::CountryCode)
                            .from_col(Cities::StateCode)
                            .to_tbl(States::Table)
                            .to_col(States::CountryCode)
                            .to_col(States::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Districts::Table)
                    .if_not_exists()
                    .col(code_col(Districts::CountryCode))
                    .col(code_col(Districts::StateCode))
                    .col(code_col(Districts::CityCode))
                    .col(code_col(Districts::Code))
                    .col(ColumnDef::new(Districts::Name).string_len(64).not_null())
                    .primary_key(
                        Index::create()
                            .col(Districts::CountryCode)
                            .col(Districts::StateCode)
                            .col(Districts::CityCode)
                            .col(Districts::Code),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_districts_city")
                            .from_tbl(Districts::Table)
                            .from_col(Districts::CountryCode)
                            .from_col(Districts::StateCode)
                            .from_col(Districts::CityCode)
                            .to_tbl(Cities::Table)
                            .to_col(Cities::CountryCode)
                            .to_col(Cities::StateCode)
                            .to_col(Cities::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Parents first so every child row satisfies its foreign key.
        manager
            .exec_stmt(seed(
                Countries::Table,
                [Countries::Code, Countries::Name],
                COUNTRIES,
            )?)
            .await?;
        manager
            .exec_stmt(seed(
                States::Table,
                [States::CountryCode, States::Code, States::Name],
                STATES,
            )?)
            .await?;
        manager
            .exec_stmt(seed(
                Cities::Table,
                [
                    Cities::CountryCode,
                    Cities::StateCode,
                    Cities::Code,
                    Cities::Name,
                ],
                CITIES,
            )?)
            .await?;
        manager
            .exec_stmt(seed(
                Districts::Table,
                [
                    Districts::CountryCode,
                    Districts::StateCode,
                    Districts::CityCode,
                    Districts::Code,
                    Districts::Name,
                ],
                DISTRICTS,
            )?)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Districts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(States::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await
    }
}

fn code_col<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column).string_len(16).not_null().to_owned()
}

fn seed<T, C, I>(table: T, columns: I, rows: &[&[&str]]) -> Result<InsertStatement, DbErr>
where
    T: IntoTableRef,
    C: IntoIden,
    I: IntoIterator<Item = C>,
{
    let mut insert = Query::insert();
    insert.into_table(table).columns(columns);

    for row in rows {
        insert
            .values(row.iter().map(|v| SimpleExpr::from(*v)))
            .map_err(|e| DbErr::Custom(e.to_string()))?;
    }

    Ok(insert.to_owned())
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Code,
    Name,
}

#[derive(DeriveIden)]
enum States {
    Table,
    CountryCode,
    Code,
    Name,
}

#[derive(DeriveIden)]
enum Cities {
    Table,
    CountryCode,
    StateCode,
    Code,
    Name,
}

#[derive(DeriveIden)]
enum Districts {
    Table,
    CountryCode,
    StateCode,
    CityCode,
    Code,
    Name,
}
