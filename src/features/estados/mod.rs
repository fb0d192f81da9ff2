//! Estado CRUD feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/estados` | Create a new estado |
//! | PUT | `/api/estados` | Update an estado (create when no id is sent) |
//! | GET | `/api/estados` | Paged list of estados |
//! | GET | `/api/estados/{id}` | Get one estado |
//! | DELETE | `/api/estados/{id}` | Delete one estado |

pub mod dtos;
pub mod handlers;
pub mod mappers;
pub mod models;
pub mod repositories;
pub mod routes;

pub use handlers::EstadoState;
pub use mappers::EstadoMapper;
pub use repositories::EstadoRepository;
