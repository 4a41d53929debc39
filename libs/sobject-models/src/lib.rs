//! Salesforce SObject metadata models
//!
//! Serde representations of the two REST payloads the generator consumes:
//!
//! - `GET /services/data/vXX.X/sobjects/` ([`GlobalObjects`]), the catalog of
//!   every SObject visible to the logged-in user
//! - `GET /services/data/vXX.X/sobjects/{name}/describe/` ([`SObjectDescription`]),
//!   the ordered field list of one SObject
//!
//! Only the attributes the generator reads are modelled explicitly; every other
//! attribute of the payload is kept in the `extensions` map so that nothing is
//! lost on a round trip.
//!
//! # Example
//!
//! ```rust
//! use sfgen_models::SObjectDescription;
//! use serde_json::json;
//!
//! let desc: SObjectDescription = serde_json::from_value(json!({
//!     "name": "Account",
//!     "label": "Account",
//!     "fields": [
//!         { "name": "Id", "label": "Account ID", "type": "id", "soapType": "tns:ID" },
//!         {
//!             "name": "Industry__c",
//!             "label": "Industry",
//!             "type": "picklist",
//!             "soapType": "xsd:string",
//!             "picklistValues": [
//!                 { "value": "Agriculture", "label": "Agriculture", "defaultValue": false, "active": true }
//!             ]
//!         }
//!     ]
//! }))
//! .unwrap();
//!
//! assert_eq!(desc.name, "Account");
//! assert!(!desc.fields[0].is_enumerated());
//! assert!(desc.fields[1].is_enumerated());
//! ```

mod description;
mod global_objects;

pub use description::{PickListValue, SObjectDescription, SObjectField};
pub use global_objects::{GlobalObjects, SObject};

use std::collections::BTreeSet;

/// Set of SObject names returned by the catalog call.
///
/// Ordered so that every run walks the catalog in the same sequence.
pub type Catalog = BTreeSet<String>;
