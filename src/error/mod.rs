//! Error handling for the PetPal client.
//!
//! - **Error Categories**: classification that drives notification titles
//! - **Domain-specific Errors**: network, server and validation errors
//! - **Unified Error Type**: `PetPalError` consolidates them
//! - **Result Type Alias**: `PetPalResult<T>`
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Request never reached the service / no response | Yes |
//! | Server | Non-success status, optional `detail` | Yes |
//! | Validation | Action impossible in current state | No |
//! | System | Local I/O | No |
//! | Configuration | Bad settings | No |

mod category;
mod network;
mod petpal_error;
mod result;
mod server;
mod validation;

pub use category::ErrorCategory;
pub use network::{classify_reqwest_error, NetworkError};
pub use petpal_error::{PetPalError, UNKNOWN_ERROR_MESSAGE};
pub use result::PetPalResult;
pub use server::{extract_detail, ServerError};
pub use validation::ValidationError;
