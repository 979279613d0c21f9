pub mod checkout;
pub mod packages;
pub mod payment_method;
pub mod payment_url;

pub use checkout::{CheckoutRequestBody, CheckoutResponse, ErrorResponse};
pub use packages::PackageInfo;
pub use payment_method::{PaymentMethod, UnsupportedPaymentMethod};
pub use payment_url::{PaymentUrl, PaymentUrlError};
