use crate::domain_model::*;
use std::net::IpAddr;

pub trait SessionFactory: Send + Sync {
    fn new_session(&self, user: &User, ip: IpAddr) -> Session;
}
