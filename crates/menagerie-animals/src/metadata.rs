//! Declared metadata of the animal hierarchy.
//!
//! Every type of the hierarchy describes itself here. Comments attached to a
//! type are declared as [`Annotation::Comment`]; the serializer hints on the
//! root are [`Annotation::XmlInclude`] and never show up in a diagram.

use menagerie_core::{
    meta::{Annotation, BaseType, FieldMeta, OperationKind, OperationMeta, TypeMeta, Visibility},
    registry::Described,
};

use crate::{
    NAMESPACE,
    animal::{Animal, Cat, Dog, Pig, Species},
    diet::{Classification, FoodKind},
};

impl Described for Animal {
    fn type_meta() -> TypeMeta {
        let mut meta = TypeMeta::structured("Animal", NAMESPACE)
            .abstract_()
            .with_annotation(Annotation::Serializable);
        for species in Species::ALL {
            meta = meta.with_annotation(Annotation::xml_include(species.to_string()));
        }

        meta.with_field(FieldMeta::new("name", "String"))
            .with_field(FieldMeta::new("age", "u32"))
            .with_field(FieldMeta::new("kind", "AnimalKind").with_visibility(Visibility::Private))
            .with_operation(
                OperationMeta::constructor("Animal")
                    .with_parameter("name", "String")
                    .with_parameter("age", "u32")
                    .with_parameter("kind", "AnimalKind"),
            )
            .with_operation(OperationMeta::accessor("name", "&str"))
            .with_operation(OperationMeta::accessor("age", "u32"))
            .with_operation(OperationMeta::method("say_hello", "String").abstract_())
            .with_operation(
                OperationMeta::method("classification", "Option<Classification>")
                    .with_parameter("diet", "&DietTable"),
            )
            .with_operation(
                OperationMeta::method("favourite_food", "Option<FoodKind>")
                    .with_parameter("diet", "&DietTable"),
            )
    }
}

impl Described for Cat {
    fn type_meta() -> TypeMeta {
        TypeMeta::structured("Cat", NAMESPACE)
            .with_base(BaseType::named("Animal"))
            .with_annotation(Annotation::comment("Cats are independent and curious."))
            .with_annotation(Annotation::comment("A cat starts out with nine lives."))
            .with_field(FieldMeta::new("lives", "u8"))
            .with_field(FieldMeta::new("is_indoor", "bool"))
            .with_operation(OperationMeta::constructor("Cat").with_parameter("is_indoor", "bool"))
            .with_operation(OperationMeta::method("purr", "String").with_parameter("volume", "u8"))
    }
}

impl Described for Dog {
    fn type_meta() -> TypeMeta {
        TypeMeta::structured("Dog", NAMESPACE)
            .with_base(BaseType::named("Animal"))
            .with_annotation(Annotation::comment("Dogs are loyal companions."))
            .with_field(FieldMeta::new("breed", "String"))
            .with_operation(OperationMeta::constructor("Dog").with_parameter("breed", "String"))
            .with_operation(OperationMeta::accessor("breed", "&str"))
            .with_operation(OperationMeta::method("fetch", "bool").with_parameter("item", "&str"))
    }
}

impl Described for Pig {
    fn type_meta() -> TypeMeta {
        TypeMeta::structured("Pig", NAMESPACE)
            .with_base(BaseType::named("Animal"))
            .with_annotation(Annotation::comment("Pigs are smarter than they look."))
            .with_field(FieldMeta::new("weight_kg", "f32"))
            .with_operation(OperationMeta::constructor("Pig").with_parameter("weight_kg", "f32"))
            .with_operation(
                OperationMeta::method("roll_in_mud", "String").with_parameter("minutes", "u32"),
            )
            .with_operation(
                OperationMeta::method("eq", "bool")
                    .with_kind(OperationKind::Special)
                    .with_parameter("other", "&Pig"),
            )
    }
}

impl Described for Classification {
    fn type_meta() -> TypeMeta {
        TypeMeta::enumeration(
            "Classification",
            NAMESPACE,
            Classification::ALL.iter().map(ToString::to_string),
        )
        .with_annotation(Annotation::comment("What an animal eats."))
    }
}

impl Described for FoodKind {
    fn type_meta() -> TypeMeta {
        TypeMeta::enumeration(
            "FoodKind",
            NAMESPACE,
            FoodKind::ALL.iter().map(ToString::to_string),
        )
    }
}
