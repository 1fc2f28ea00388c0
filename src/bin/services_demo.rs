/// Walks through the local services the way an upstream dispatcher would:
/// log a player in, look them up, then resolve the authors of a map batch.
///
/// $ cargo run --bin services_demo -- --settings=settings/dev.toml
use local_api::application_port::*;
use local_api::domain_model::*;
use local_api::logger::*;
use local_api::server::Server;
use local_api::settings::*;
use std::net::{IpAddr, Ipv4Addr};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let logger = Logger::new_bootstrap();
    let settings = parse_settings(cli.settings.as_deref())?;
    logger.reload_from_config(&settings.log)?;

    let server = Server::try_new(&settings)?;
    let users = server.user_service.clone();

    let player = UserId(uuid::Uuid::new_v4());
    let login = users
        .login(LoginRequest {
            player_id: player,
            username: "DemoPlayer".to_string(),
            ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
            start_session: true,
            virtual_host: None,
        })
        .await?;
    println!("login: {}", serde_json::to_string_pretty(&login)?);

    let found = users.find(player).await?;
    println!("find: {}", serde_json::to_string(&found)?);

    match users.find(UserId(uuid::Uuid::nil())).await {
        Ok(user) => println!("unexpected user: {:?}", user),
        Err(e) => println!("find nil: {}", e),
    }

    let mut maps = vec![MapDoc {
        id: MapId("demo".to_string()),
        name: "Demo".to_string(),
        version: "1.0.0".to_string(),
        authors: vec![Contributor::new(player)],
        contributors: Vec::new(),
    }];
    for known in &settings.user.known {
        maps[0].contributors.push(Contributor {
            user_id: known.id,
            contribution: Some("Seeded".to_string()),
        });
    }
    maps.push(maps[0].clone());

    let response = server.map_service.update_maps_and_lookup_authors(&maps);
    println!("maps: {:?}", response.maps_result.await?);
    for (id, lookup) in response.authors {
        match lookup.await {
            Ok(user) => println!("author {} -> {:?}", id, user.username()),
            Err(e) => println!("author {} -> {}", id, e),
        }
    }

    server.shutdown().await;
    Ok(())
}
