//! Cidade CRUD feature.
//!
//! A cidade optionally references an estado. On the wire the reference is
//! flattened to `estadoId` plus a read-only `estadoNome`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/cidades` | Create a new cidade |
//! | PUT | `/api/cidades` | Update a cidade (create when no id is sent) |
//! | GET | `/api/cidades` | Paged list of cidades |
//! | GET | `/api/cidades/{id}` | Get one cidade |
//! | DELETE | `/api/cidades/{id}` | Delete one cidade |

pub mod dtos;
pub mod handlers;
pub mod mappers;
pub mod models;
pub mod repositories;
pub mod routes;

pub use handlers::CidadeState;
pub use mappers::CidadeMapper;
pub use repositories::CidadeRepository;
