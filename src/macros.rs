/// Implements `approx::AbsDiffEq` and `approx::RelativeEq` for a struct by
/// comparing the listed fields with a shared `Real` epsilon.
macro_rules! impl_approx_eq {
    ($type:ty { $($field:ident),+ $(,)? }) => {
        impl approx::AbsDiffEq for $type {
            type Epsilon = $crate::float_types::Real;

            fn default_epsilon() -> Self::Epsilon {
                <$crate::float_types::Real as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl approx::RelativeEq for $type {
            fn default_max_relative() -> Self::Epsilon {
                <$crate::float_types::Real as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(approx::RelativeEq::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))&&+
            }
        }
    };
}
