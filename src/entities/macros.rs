//! Macros for reducing boilerplate when declaring records
//!
//! Record structs are written by hand (their serde attributes differ per
//! backend collection); the macro generates the `Entity` and `Data`
//! implementations from a declaration of the collection, the searchable
//! and filterable fields, and the wire names of the fields.

/// Implement `Entity` and `Data` for a record struct
///
/// The struct must have an `id: EntityId` field, and every field listed
/// under `fields` must implement `IntoFieldValue`.
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(
///     User, "users", "customer",
///     draft: UserDraft,
///     search: ["name", "email", "region"],
///     filters: ["status", "region"],
///     fields: {
///         "id" => id,
///         "name" => name,
///         "lastOrder" => last_order,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        $resource:expr,
        $singular:expr,
        draft: $draft:ty,
        search: [ $( $search:expr ),* $(,)? ],
        filters: [ $( $filter:expr ),* $(,)? ],
        fields: { $( $wire:literal => $field:ident ),+ $(,)? } $(,)?
    ) => {
        impl $crate::core::entity::Entity for $type {
            type Draft = $draft;

            fn resource_name() -> &'static str {
                $resource
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> $crate::core::entity::EntityId {
                self.id.clone()
            }
        }

        impl $crate::core::entity::Data for $type {
            fn indexed_fields() -> &'static [&'static str] {
                &[ $( $search ),* ]
            }

            fn filter_fields() -> &'static [&'static str] {
                &[ $( $filter ),* ]
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                use $crate::core::field::IntoFieldValue;
                match field {
                    $( $wire => Some(self.$field.to_field_value()), )+
                    _ => None,
                }
            }
        }
    };
}
