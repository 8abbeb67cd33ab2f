//! Applies migrations and seeds a demo agent with a few assigned packages.
//!
//! ```bash
//! cargo run -p infrastructure --example seed_demo_data
//! ```

use domain::{AgentRepository, CredentialHasher, NewAgent, NewPackage, PackageRepository, Username};
use infrastructure::database::connect;
use infrastructure::{Argon2Hasher, SeaOrmAgentRepository, SeaOrmPackageRepository, ServerConfig};
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenv::dotenv().ok();

    let config = ServerConfig::load("config")?;

    println!("Connecting to database...");
    let db = connect(&config.database_url()).await?;

    println!("Running migrations...");
    Migrator::up(&db, None).await?;

    let agents = SeaOrmAgentRepository::new(db.clone());
    let agent = match agents.find_by_username("demo").await? {
        Some(agent) => agent,
        None => {
            let hash = Argon2Hasher::new().hash("demo123").await?;
            agents
                .insert(NewAgent::new(
                    Username::new("demo")?,
                    hash,
                    Some("Demo Courier".to_string()),
                ))
                .await?
        }
    };
    println!("Agent '{}' has id {}", agent.username, agent.id);

    let packages = SeaOrmPackageRepository::new(db);
    let seeds = [
        ("PKG-DEMO-001", "Av. Paseo de la Reforma 222", "06600"),
        ("PKG-DEMO-002", "Calle Madero 17", "06000"),
        ("PKG-DEMO-003", "Av. Insurgentes Sur 1602", "03940"),
    ];

    for (uid, address, postal_code) in seeds {
        if packages.find_by_uid(uid).await?.is_some() {
            println!("Package {} already present", uid);
            continue;
        }
        let pkg = packages
            .insert(
                NewPackage::new(uid, address)
                    .with_locality("Ciudad de México", "CDMX", postal_code)
                    .assigned_to(agent.id),
            )
            .await?;
        println!("Seeded package {} (id {})", pkg.package_uid, pkg.id);
    }

    println!("✅ Demo data ready.");

    Ok(())
}
