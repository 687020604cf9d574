use sea_orm_migration::prelude::*;

use crate::m20230612_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_profiles_table()).await?;

        // =====================================================
        // Constraints
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE profiles
                ADD CONSTRAINT chk_profiles_gender
                CHECK (gender IN ('Male', 'Female', 'Other'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE profiles
                ADD CONSTRAINT chk_profiles_num_reviews
                CHECK (num_reviews IS NULL OR num_reviews >= 0);
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Agent directory listing, best rated first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_profiles_agents
                ON profiles (rating DESC NULLS LAST, created_at)
                WHERE is_agent = true;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_profiles_updated_at
                BEFORE UPDATE ON profiles
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
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
                DROP TRIGGER IF EXISTS update_profiles_updated_at ON profiles;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_profiles_agents;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

/// Column layout of `profiles`. Every default here is what a freshly
/// provisioned profile carries.
pub(crate) fn create_profiles_table() -> TableCreateStatement {
    Table::create()
        .table(Profiles::Table)
        .if_not_exists()
        // Internal surrogate key, never exposed through the API
        .col(
            ColumnDef::new(Profiles::Pkid)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        // Public identifier
        .col(
            ColumnDef::new(Profiles::Id)
                .uuid()
                .not_null()
                .unique_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(
            ColumnDef::new(Profiles::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Profiles::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Profiles::PhoneNumber)
                .string_len(30)
                .not_null()
                .default("+972549843454"),
        )
        .col(
            ColumnDef::new(Profiles::AboutMe)
                .text()
                .not_null()
                .default("Say something about yourself"),
        )
        .col(ColumnDef::new(Profiles::License).string_len(20).null())
        .col(
            ColumnDef::new(Profiles::ProfilePhoto)
                .string_len(100)
                .not_null()
                .default("/profile_default.png"),
        )
        .col(
            ColumnDef::new(Profiles::Gender)
                .string_len(20)
                .not_null()
                .default("Other"),
        )
        .col(
            ColumnDef::new(Profiles::Country)
                .string_len(2)
                .not_null()
                .default("IL"),
        )
        .col(
            ColumnDef::new(Profiles::City)
                .string_len(50)
                .not_null()
                .default("Tel-Aviv"),
        )
        .col(
            ColumnDef::new(Profiles::IsBuyer)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Profiles::IsSeller)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Profiles::IsAgent)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Profiles::TopAgent)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Profiles::Rating).decimal_len(4, 2).null())
        .col(
            ColumnDef::new(Profiles::NumReviews)
                .integer()
                .null()
                .default(0),
        )
        .col(
            ColumnDef::new(Profiles::UserId)
                .uuid()
                .not_null()
                .unique_key(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_profiles_user_id")
                .from(Profiles::Table, Profiles::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Pkid,
    Id,
    CreatedAt,
    UpdatedAt,
    PhoneNumber,
    AboutMe,
    License,
    ProfilePhoto,
    Gender,
    Country,
    City,
    IsBuyer,
    IsSeller,
    IsAgent,
    TopAgent,
    Rating,
    NumReviews,
    UserId,
}
