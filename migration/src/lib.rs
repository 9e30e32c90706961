pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_horse_table;
mod m20250301_000003_create_horse_image_table;
mod m20250302_000004_create_market_listing_table;
mod m20250302_000005_create_transaction_table;
mod m20250303_000006_create_rental_listing_table;
mod m20250303_000007_create_rental_booking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_horse_table::Migration),
            Box::new(m20250301_000003_create_horse_image_table::Migration),
            Box::new(m20250302_000004_create_market_listing_table::Migration),
            Box::new(m20250302_000005_create_transaction_table::Migration),
            Box::new(m20250303_000006_create_rental_listing_table::Migration),
            Box::new(m20250303_000007_create_rental_booking_table::Migration),
        ]
    }
}
