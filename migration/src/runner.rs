use colored::*;
use futures::FutureExt;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

type MigrationOutcome = Result<Result<(), DbErr>, Box<dyn std::any::Any + Send>>;

pub async fn run_all_migrations(url: &str) {
    let db = sea_orm::Database::connect(url)
        .await
        .expect("DB connection failed");

    println!("Running migrations...");
    let schema_manager = SchemaManager::new(&db);

    for migration in <migration::Migrator as MigratorTrait>::migrations() {
        run_migration(&schema_manager, migration).await;
    }
}

async fn run_migration(schema_manager: &SchemaManager<'_>, migration: Box<dyn MigrationTrait>) {
    let name_str = format!("Applying {}", migration.name().bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let outcome = std::panic::AssertUnwindSafe(migration.up(schema_manager))
        .catch_unwind()
        .await;

    if migration_succeeded(&outcome) {
        let time_str = format!("({:.2?})", start.elapsed()).dimmed();
        println!("{} {}", "done".green(), time_str);
    } else {
        println!("{}", "failed".red());
        if let Ok(Err(e)) = outcome {
            eprintln!("{e}");
        }
        std::process::exit(1);
    }
}

/// A migration fails both when it panics and when it returns an error.
fn migration_succeeded(outcome: &MigrationOutcome) -> bool {
    matches!(outcome, Ok(Ok(())))
}
