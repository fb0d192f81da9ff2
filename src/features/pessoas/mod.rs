//! Pessoa CRUD feature.
//!
//! Pessoa has no DTO projection: the row is serialized directly, so the wire
//! format and the storage format are the same.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/pessoas` | Create a new pessoa |
//! | PUT | `/api/pessoas` | Update a pessoa (create when no id is sent) |
//! | GET | `/api/pessoas` | Paged list of pessoas |
//! | GET | `/api/pessoas/{id}` | Get one pessoa |
//! | DELETE | `/api/pessoas/{id}` | Delete one pessoa |

pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;

pub use repositories::PessoaRepository;
