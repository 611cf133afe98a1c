//! Database seeding for local development.
//!
//! - Parallel username generation using Rayon
//! - Batch inserts with multi-value INSERT statements
//! - A single low-cost bcrypt hash reused for every seeded account

use std::time::Instant;

use bcrypt::non_truncating_hash;
use fake::Fake;
use fake::faker::internet::en::Username;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const BATCH_SIZE: usize = 1000;

// Seeded accounts are for local use; cost 4 keeps large seeds fast.
const SEED_HASH_COST: u32 = 4;

/// Generates `count` distinct usernames.
///
/// Each fake name gets its index appended so collisions between faker
/// outputs cannot shrink the batch.
pub fn generate_usernames(count: usize) -> Vec<String> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let base: String = Username().fake();
            format!("{}_{}", base.to_lowercase(), idx)
        })
        .collect()
}

/// Inserts `count` fake accounts that all share `password`.
///
/// Usernames already present are skipped. Returns the number of rows written.
pub async fn seed_users(db: &PgPool, count: usize, password: &str) -> anyhow::Result<u64> {
    let start = Instant::now();

    let password_hash = non_truncating_hash(password, SEED_HASH_COST)?;
    let usernames = generate_usernames(count);
    println!("   Generated {} usernames in {:?}", usernames.len(), start.elapsed());

    let mut inserted = 0;
    for chunk in usernames.chunks(BATCH_SIZE) {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO users (id, username, password) ");
        builder.push_values(chunk, |mut row, username| {
            row.push_bind(Uuid::new_v4())
                .push_bind(username)
                .push_bind(&password_hash);
        });
        builder.push(" ON CONFLICT (username) DO NOTHING");

        inserted += builder.build().execute(db).await?.rows_affected();
    }

    println!("   Inserted {} users in {:?}", inserted, start.elapsed());
    Ok(inserted)
}

/// Deletes every account. Returns the number of rows removed.
pub async fn clear_users(db: &PgPool) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM users").execute(db).await?;
    Ok(result.rows_affected())
}
