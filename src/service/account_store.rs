use sqlx::SqlitePool;

use crate::model::account::{AccountRecord, NewAccount};

/// Persistence of player accounts in the flat `accounts` table.
#[derive(Clone)]
pub struct AccountStore {
    pool: SqlitePool,
}

impl AccountStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `accounts` table if it does not exist yet.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player TEXT,
                riotId TEXT,
                server TEXT,
                peakRank TEXT,
                peakDivision TEXT,
                peakLP INTEGER
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<AccountRecord>, sqlx::Error> {
        sqlx::query_as::<_, AccountRecord>(
            "SELECT id, player, riotId, server, peakRank, peakDivision, peakLP FROM accounts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn insert(&self, account: NewAccount) -> Result<AccountRecord, sqlx::Error> {
        sqlx::query_as::<_, AccountRecord>(
            r#"
            INSERT INTO accounts (player, riotId, server, peakRank, peakDivision, peakLP)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, player, riotId, server, peakRank, peakDivision, peakLP
            "#,
        )
        .bind(account.player)
        .bind(account.riot_id)
        .bind(account.server)
        .bind(account.peak_rank)
        .bind(account.peak_division)
        .bind(account.peak_lp)
        .fetch_one(&self.pool)
        .await
    }

    /// Returns the number of removed rows, zero when the id is unknown.
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_by_player(&self, player: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounts WHERE player = ?")
            .bind(player)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
pub mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    /// Fresh store backed by a private in-memory database.
    pub async fn memory_store() -> AccountStore {
        // Every sqlite memory connection is its own database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let store = AccountStore::new(pool);
        store.init().await.unwrap();
        store
    }

    impl AccountStore {
        /// Breaks the store so every statement fails.
        pub async fn drop_table(&self) {
            sqlx::query("DROP TABLE accounts").execute(&self.pool).await.unwrap();
        }
    }

    pub fn new_account(player: &str, riot_id: &str) -> NewAccount {
        NewAccount {
            player: player.into(),
            riot_id: riot_id.into(),
            server: "euw".into(),
            peak_rank: None,
            peak_division: None,
            peak_lp: None,
        }
    }

    #[tokio::test]
    async fn insert_then_list() {
        let store = memory_store().await;
        let mut account = new_account("A", "X#1");
        account.peak_rank = Some("DIAMOND".into());
        account.peak_division = Some("II".into());
        account.peak_lp = Some(67);

        let inserted = store.insert(account).await.unwrap();
        let listed = store.list().await.unwrap();

        assert_eq!(listed, vec![inserted.clone()]);
        assert_eq!(inserted.player, "A");
        assert_eq!(inserted.riot_id, "X#1");
        assert_eq!(inserted.peak_rank.as_deref(), Some("DIAMOND"));
        assert_eq!(inserted.peak_lp, Some(67));
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let store = memory_store().await;
        store.insert(new_account("A", "X#1")).await.unwrap();
        store.init().await.unwrap();

        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_by_id_removes_only_that_record() {
        let store = memory_store().await;
        let first = store.insert(new_account("A", "X#1")).await.unwrap();
        let second = store.insert(new_account("A", "X#2")).await.unwrap();

        assert_eq!(store.delete_by_id(first.id).await.unwrap(), 1);
        assert_eq!(store.list().await.unwrap(), vec![second]);
        assert_eq!(store.delete_by_id(first.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_by_player_removes_all_of_their_records() {
        let store = memory_store().await;
        store.insert(new_account("A", "X#1")).await.unwrap();
        store.insert(new_account("A", "X#2")).await.unwrap();
        let other = store.insert(new_account("B", "Y#1")).await.unwrap();

        assert_eq!(store.delete_by_player("A").await.unwrap(), 2);
        assert_eq!(store.list().await.unwrap(), vec![other]);
    }
}
