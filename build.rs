//! Build script for the embedded store migrations.
//!
//! `sqlx::migrate!` embeds `data/sql/sqlite` at compile time, so cargo has to
//! know to rebuild when a migration file is added or edited.

fn main() {
    println!("cargo:rerun-if-changed=data/sql/sqlite");
}
