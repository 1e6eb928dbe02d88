use anyhow::Result;

use scryfall_client::ScryfallClient;
use scryfall_core::CardMigration;

use super::output::print_json;

pub async fn run_migrations(
    client: &ScryfallClient,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut migrations = client.migrations().await?;
    if let Some(limit) = limit {
        migrations.truncate(limit);
    }

    if json {
        return print_json(&migrations);
    }
    for migration in &migrations {
        println!("{}", migration_line(migration));
    }
    Ok(())
}

fn migration_line(migration: &CardMigration) -> String {
    let target = migration
        .new_scryfall_id
        .map(|id| format!(" -> {id}"))
        .unwrap_or_default();
    let mut line = format!(
        "{} {:<6} {}{target}",
        migration.performed_at, migration.migration_strategy, migration.old_scryfall_id
    );
    if let Some(note) = migration.note.as_deref().filter(|n| !n.is_empty()) {
        line.push_str("\n    ");
        line.push_str(note);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_line() {
        let migration: CardMigration = serde_json::from_value(serde_json::json!({
            "object": "migration",
            "id": "5cc1b4a4-7ac8-4e35-9c4e-f6c4d5a3b3f1",
            "uri": "https://api.scryfall.com/migrations/5cc1b4a4-7ac8-4e35-9c4e-f6c4d5a3b3f1",
            "performed_at": "2023-02-13",
            "migration_strategy": "merge",
            "old_scryfall_id": "0c3ad2ce-5d0b-4b6f-8b4f-7f0a0b9e9c0e",
            "new_scryfall_id": "6e0c8f43-d1b6-4b80-9a8f-1b5ac3a3b3b1",
            "note": "Duplicate print"
        }))
        .unwrap();
        assert_eq!(
            migration_line(&migration),
            "2023-02-13 merge  0c3ad2ce-5d0b-4b6f-8b4f-7f0a0b9e9c0e -> 6e0c8f43-d1b6-4b80-9a8f-1b5ac3a3b3b1\n    Duplicate print"
        );
    }
}
