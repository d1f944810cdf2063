//! Services - company lookup and response mapping
//!
//! - `lookup` - `CompanyInfoService`, the public lookup operation
//! - `mapper` - registry response to `CompanyInfo` resolution

pub mod lookup;
pub mod mapper;

pub use lookup::CompanyInfoService;
pub use mapper::map_company_info;
