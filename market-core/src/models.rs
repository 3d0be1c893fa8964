mod market;
mod product;
mod seller;
mod validation;

pub use market::{MarketData, MarketDto, MarketPatch, MarketRecord};
pub use product::{ProductData, ProductDto, ProductPatch, ProductRecord};
pub use seller::{SellerData, SellerDto, SellerPatch, SellerRecord};
pub use validation::{FieldErrors, invalid_pk};

macro_rules! id_wrapper {
    ($struct: ident) => {
        /// An integer row-id newtype
        #[derive(
            Debug,
            Hash,
            PartialEq,
            Eq,
            Clone,
            Copy,
            serde::Serialize,
            serde::Deserialize,
            PartialOrd,
            Ord,
            utoipa::ToSchema,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $struct(pub i64);

        impl From<i64> for $struct {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl Into<i64> for $struct {
            fn into(self) -> i64 {
                self.0
            }
        }

        impl TryFrom<&str> for $struct {
            type Error = <i64 as std::str::FromStr>::Err;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Ok(Self(<i64 as std::str::FromStr>::from_str(value)?))
            }
        }

        impl std::ops::Deref for $struct {
            type Target = i64;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_wrapper!(MarketId);
id_wrapper!(SellerId);
id_wrapper!(ProductId);
