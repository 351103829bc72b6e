//! Descriptor macros: the compile-time stand-in for constructor reflection.

/// Implements [`crate::Generate`] for a fieldless enumeration by uniformly
/// picking one declared variant by index. The enumeration must derive
/// `Clone`.
#[macro_export]
macro_rules! generate_enum {
    ($ty:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::Generate for $ty {
            fn generate(
                engine: &mut $crate::ValueEngine<'_>,
            ) -> Result<Self, $crate::GenerateError> {
                const VARIANTS: &[$ty] = &[$(<$ty>::$variant),+];
                let index = engine.random_mut().next_below(VARIANTS.len() as i32)? as usize;
                Ok(VARIANTS[index].clone())
            }
        }
    };
}

/// Implements [`crate::Generate`] by recursively generating each constructor
/// parameter, then invoking the constructor. Parameters go back through the
/// engine, so override hooks apply to them too.
#[macro_export]
macro_rules! generate_via_constructor {
    ($ty:ty, $ctor:path, ($($param:ty),* $(,)?)) => {
        impl $crate::Generate for $ty {
            fn generate(
                engine: &mut $crate::ValueEngine<'_>,
            ) -> Result<Self, $crate::GenerateError> {
                Ok($ctor($(engine.generate::<$param>()?),*))
            }
        }
    };
}

/// Descriptor for a type with no usable public constructor: generation always
/// fails with [`crate::GenerateError::Unsupported`].
#[macro_export]
macro_rules! generate_unconstructible {
    ($ty:ty) => {
        impl $crate::Generate for $ty {
            fn generate(
                _engine: &mut $crate::ValueEngine<'_>,
            ) -> Result<Self, $crate::GenerateError> {
                Err($crate::GenerateError::Unsupported(stringify!($ty)))
            }
        }
    };
}
