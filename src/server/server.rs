use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_memory::*;
use crate::logger::*;
use crate::settings::Settings;
use std::sync::Arc;

pub struct Server {
    pub user_service: Arc<dyn UserService>,
    pub map_service: Arc<dyn MapService>,
    directory: Arc<MemoryUserDirectory>,
}

impl Server {
    pub fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let directory = Arc::new(MemoryUserDirectory::new());
        for known in &settings.user.known {
            directory.seed(known.id, &known.username);
        }
        let user_finder: Arc<dyn UserFinder> = directory.clone();
        let user_factory: Arc<dyn UserFactory> = directory.clone();
        let session_factory: Arc<dyn SessionFactory> =
            Arc::new(LocalSessionFactory::new(settings.server.id.clone()));

        let user_service: Arc<dyn UserService> = match settings.user.backend.as_str() {
            "local" => Arc::new(LocalUserService::new(
                user_finder,
                user_factory,
                session_factory,
            )),
            other => return Err(anyhow::anyhow!("Unknown user backend: {}", other)),
        };

        let map_service: Arc<dyn MapService> = match settings.map.backend.as_str() {
            "local" => Arc::new(LocalMapService::new(user_service.clone())),
            other => return Err(anyhow::anyhow!("Unknown map backend: {}", other)),
        };

        info!(
            server_id = %settings.server.id,
            known_users = directory.len(),
            "server started"
        );

        Ok(Self {
            user_service,
            map_service,
            directory,
        })
    }

    pub fn known_users(&self) -> usize {
        self.directory.len()
    }

    pub async fn shutdown(&self) {
        info!(known_users = self.known_users(), "server shutting down...");
    }
}
