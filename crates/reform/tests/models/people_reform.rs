// Code generated by reform-gen from people.rs. DO NOT EDIT.

/// The table people, for [Person].
pub struct PersonTable {
    descriptor: ::reform::RecordDescriptor,
}

::reform::lazy_static! {
    pub static ref PERSON_TABLE: PersonTable = {
        static FIELDS: [::reform::FieldDescriptor; 6] = [
            ::reform::FieldDescriptor::new_static("id", "i32", "id", true),
            ::reform::FieldDescriptor::new_static("group_id", "Option<i32>", "group_id", false),
            ::reform::FieldDescriptor::new_static("name", "String", "name", false),
            ::reform::FieldDescriptor::new_static("email", "Option<String>", "email", false),
            ::reform::FieldDescriptor::new_static("created_at", "OffsetDateTime", "created_at", false),
            ::reform::FieldDescriptor::new_static("updated_at", "Option<OffsetDateTime>", "updated_at", false),
        ];
        let descriptor = ::reform::RecordDescriptor::new_static(
            "Person",
            None,
            "people",
            &FIELDS,
            Some(0),
        );
        ::reform::assert_up_to_date::<Person>(&descriptor);
        PersonTable { descriptor }
    };
}

impl ::reform::View for PersonTable {
    fn descriptor(&self) -> &::reform::RecordDescriptor {
        &self.descriptor
    }

    fn new_struct(&self) -> ::std::boxed::Box<dyn ::reform::Struct> {
        ::std::boxed::Box::new(<Person as ::std::default::Default>::default())
    }
}

impl ::reform::Table for PersonTable {
    fn new_record(&self) -> ::std::boxed::Box<dyn ::reform::Record> {
        ::std::boxed::Box::new(<Person as ::std::default::Default>::default())
    }

    fn pk_column_index(&self) -> usize {
        0
    }
}

impl ::reform::Struct for Person {
    fn view(&self) -> &'static dyn ::reform::View {
        &*PERSON_TABLE
    }

    fn values(&self) -> ::std::vec::Vec<::reform::Value> {
        ::std::vec![
            ::reform::ToValue::to_value(&self.id),
            ::reform::ToValue::to_value(&self.group_id),
            ::reform::ToValue::to_value(&self.name),
            ::reform::ToValue::to_value(&self.email),
            ::reform::ToValue::to_value(&self.created_at),
            ::reform::ToValue::to_value(&self.updated_at),
        ]
    }

    fn pointers(&mut self) -> ::std::vec::Vec<&mut dyn ::reform::Scan> {
        ::std::vec![
            &mut self.id as &mut dyn ::reform::Scan,
            &mut self.group_id as &mut dyn ::reform::Scan,
            &mut self.name as &mut dyn ::reform::Scan,
            &mut self.email as &mut dyn ::reform::Scan,
            &mut self.created_at as &mut dyn ::reform::Scan,
            &mut self.updated_at as &mut dyn ::reform::Scan,
        ]
    }

    fn as_record(&self) -> ::std::option::Option<&dyn ::reform::Record> {
        ::std::option::Option::Some(self)
    }

    fn as_record_mut(&mut self) -> ::std::option::Option<&mut dyn ::reform::Record> {
        ::std::option::Option::Some(self)
    }

    fn as_before_insert(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeInsert> {
        ::std::option::Option::Some(self)
    }

    fn as_before_update(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeUpdate> {
        ::std::option::Option::Some(self)
    }

    fn as_after_find(&mut self) -> ::std::option::Option<&mut dyn ::reform::AfterFind> {
        ::std::option::Option::Some(self)
    }
}

impl ::reform::Record for Person {
    fn table(&self) -> &'static dyn ::reform::Table {
        &*PERSON_TABLE
    }

    fn pk_value(&self) -> ::reform::Value {
        ::reform::ToValue::to_value(&self.id)
    }

    fn pk_pointer(&mut self) -> &mut dyn ::reform::Scan {
        &mut self.id
    }

    fn has_pk(&self) -> bool {
        !::reform::is_zero(&self.id)
    }
}

/// The table projects, for [Project].
pub struct ProjectTable {
    descriptor: ::reform::RecordDescriptor,
}

::reform::lazy_static! {
    pub static ref PROJECT_TABLE: ProjectTable = {
        static FIELDS: [::reform::FieldDescriptor; 3] = [
            ::reform::FieldDescriptor::new_static("name", "String", "name", false),
            ::reform::FieldDescriptor::new_static("id", "String", "id", true),
            ::reform::FieldDescriptor::new_static("start", "Option<OffsetDateTime>", "start", false),
        ];
        let descriptor = ::reform::RecordDescriptor::new_static(
            "Project",
            None,
            "projects",
            &FIELDS,
            Some(1),
        );
        ::reform::assert_up_to_date::<Project>(&descriptor);
        ProjectTable { descriptor }
    };
}

impl ::reform::View for ProjectTable {
    fn descriptor(&self) -> &::reform::RecordDescriptor {
        &self.descriptor
    }

    fn new_struct(&self) -> ::std::boxed::Box<dyn ::reform::Struct> {
        ::std::boxed::Box::new(<Project as ::std::default::Default>::default())
    }
}

impl ::reform::Table for ProjectTable {
    fn new_record(&self) -> ::std::boxed::Box<dyn ::reform::Record> {
        ::std::boxed::Box::new(<Project as ::std::default::Default>::default())
    }

    fn pk_column_index(&self) -> usize {
        1
    }
}

impl ::reform::Struct for Project {
    fn view(&self) -> &'static dyn ::reform::View {
        &*PROJECT_TABLE
    }

    fn values(&self) -> ::std::vec::Vec<::reform::Value> {
        ::std::vec![
            ::reform::ToValue::to_value(&self.name),
            ::reform::ToValue::to_value(&self.id),
            ::reform::ToValue::to_value(&self.start),
        ]
    }

    fn pointers(&mut self) -> ::std::vec::Vec<&mut dyn ::reform::Scan> {
        ::std::vec![
            &mut self.name as &mut dyn ::reform::Scan,
            &mut self.id as &mut dyn ::reform::Scan,
            &mut self.start as &mut dyn ::reform::Scan,
        ]
    }

    fn as_record(&self) -> ::std::option::Option<&dyn ::reform::Record> {
        ::std::option::Option::Some(self)
    }

    fn as_record_mut(&mut self) -> ::std::option::Option<&mut dyn ::reform::Record> {
        ::std::option::Option::Some(self)
    }

    fn as_before_insert(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeInsert> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasBeforeInsert as _, NoBeforeInsert as _};
        ::reform::detect::Detect(self).before_insert_hook()
    }

    fn as_before_update(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeUpdate> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasBeforeUpdate as _, NoBeforeUpdate as _};
        ::reform::detect::Detect(self).before_update_hook()
    }

    fn as_after_find(&mut self) -> ::std::option::Option<&mut dyn ::reform::AfterFind> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasAfterFind as _, NoAfterFind as _};
        ::reform::detect::Detect(self).after_find_hook()
    }
}

impl ::reform::Record for Project {
    fn table(&self) -> &'static dyn ::reform::Table {
        &*PROJECT_TABLE
    }

    fn pk_value(&self) -> ::reform::Value {
        ::reform::ToValue::to_value(&self.id)
    }

    fn pk_pointer(&mut self) -> &mut dyn ::reform::Scan {
        &mut self.id
    }

    fn has_pk(&self) -> bool {
        !::reform::is_zero(&self.id)
    }
}

/// The view person_project, for [PersonProject].
pub struct PersonProjectView {
    descriptor: ::reform::RecordDescriptor,
}

::reform::lazy_static! {
    pub static ref PERSON_PROJECT_VIEW: PersonProjectView = {
        static FIELDS: [::reform::FieldDescriptor; 2] = [
            ::reform::FieldDescriptor::new_static("person_id", "i32", "person_id", false),
            ::reform::FieldDescriptor::new_static("project_id", "String", "project_id", false),
        ];
        let descriptor = ::reform::RecordDescriptor::new_static(
            "PersonProject",
            None,
            "person_project",
            &FIELDS,
            None,
        );
        ::reform::assert_up_to_date::<PersonProject>(&descriptor);
        PersonProjectView { descriptor }
    };
}

impl ::reform::View for PersonProjectView {
    fn descriptor(&self) -> &::reform::RecordDescriptor {
        &self.descriptor
    }

    fn new_struct(&self) -> ::std::boxed::Box<dyn ::reform::Struct> {
        ::std::boxed::Box::new(<PersonProject as ::std::default::Default>::default())
    }
}

impl ::reform::Struct for PersonProject {
    fn view(&self) -> &'static dyn ::reform::View {
        &*PERSON_PROJECT_VIEW
    }

    fn values(&self) -> ::std::vec::Vec<::reform::Value> {
        ::std::vec![
            ::reform::ToValue::to_value(&self.person_id),
            ::reform::ToValue::to_value(&self.project_id),
        ]
    }

    fn pointers(&mut self) -> ::std::vec::Vec<&mut dyn ::reform::Scan> {
        ::std::vec![
            &mut self.person_id as &mut dyn ::reform::Scan,
            &mut self.project_id as &mut dyn ::reform::Scan,
        ]
    }

    fn as_before_insert(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeInsert> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasBeforeInsert as _, NoBeforeInsert as _};
        ::reform::detect::Detect(self).before_insert_hook()
    }

    fn as_before_update(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeUpdate> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasBeforeUpdate as _, NoBeforeUpdate as _};
        ::reform::detect::Detect(self).before_update_hook()
    }

    fn as_after_find(&mut self) -> ::std::option::Option<&mut dyn ::reform::AfterFind> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasAfterFind as _, NoAfterFind as _};
        ::reform::detect::Detect(self).after_find_hook()
    }
}

/// The table legacy.people, for [LegacyPerson].
pub struct LegacyPersonTable {
    descriptor: ::reform::RecordDescriptor,
}

::reform::lazy_static! {
    pub static ref LEGACY_PERSON_TABLE: LegacyPersonTable = {
        static FIELDS: [::reform::FieldDescriptor; 2] = [
            ::reform::FieldDescriptor::new_static("id", "i32", "id", true),
            ::reform::FieldDescriptor::new_static("name", "Option<String>", "name", false),
        ];
        let descriptor = ::reform::RecordDescriptor::new_static(
            "LegacyPerson",
            Some("legacy"),
            "people",
            &FIELDS,
            Some(0),
        );
        ::reform::assert_up_to_date::<LegacyPerson>(&descriptor);
        LegacyPersonTable { descriptor }
    };
}

impl ::reform::View for LegacyPersonTable {
    fn descriptor(&self) -> &::reform::RecordDescriptor {
        &self.descriptor
    }

    fn new_struct(&self) -> ::std::boxed::Box<dyn ::reform::Struct> {
        ::std::boxed::Box::new(<LegacyPerson as ::std::default::Default>::default())
    }
}

impl ::reform::Table for LegacyPersonTable {
    fn new_record(&self) -> ::std::boxed::Box<dyn ::reform::Record> {
        ::std::boxed::Box::new(<LegacyPerson as ::std::default::Default>::default())
    }

    fn pk_column_index(&self) -> usize {
        0
    }
}

impl ::reform::Struct for LegacyPerson {
    fn view(&self) -> &'static dyn ::reform::View {
        &*LEGACY_PERSON_TABLE
    }

    fn values(&self) -> ::std::vec::Vec<::reform::Value> {
        ::std::vec![
            ::reform::ToValue::to_value(&self.id),
            ::reform::ToValue::to_value(&self.name),
        ]
    }

    fn pointers(&mut self) -> ::std::vec::Vec<&mut dyn ::reform::Scan> {
        ::std::vec![
            &mut self.id as &mut dyn ::reform::Scan,
            &mut self.name as &mut dyn ::reform::Scan,
        ]
    }

    fn as_record(&self) -> ::std::option::Option<&dyn ::reform::Record> {
        ::std::option::Option::Some(self)
    }

    fn as_record_mut(&mut self) -> ::std::option::Option<&mut dyn ::reform::Record> {
        ::std::option::Option::Some(self)
    }

    fn as_before_insert(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeInsert> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasBeforeInsert as _, NoBeforeInsert as _};
        ::reform::detect::Detect(self).before_insert_hook()
    }

    fn as_before_update(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeUpdate> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasBeforeUpdate as _, NoBeforeUpdate as _};
        ::reform::detect::Detect(self).before_update_hook()
    }

    fn as_after_find(&mut self) -> ::std::option::Option<&mut dyn ::reform::AfterFind> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasAfterFind as _, NoAfterFind as _};
        ::reform::detect::Detect(self).after_find_hook()
    }
}

impl ::reform::Record for LegacyPerson {
    fn table(&self) -> &'static dyn ::reform::Table {
        &*LEGACY_PERSON_TABLE
    }

    fn pk_value(&self) -> ::reform::Value {
        ::reform::ToValue::to_value(&self.id)
    }

    fn pk_pointer(&mut self) -> &mut dyn ::reform::Scan {
        &mut self.id
    }

    fn has_pk(&self) -> bool {
        !::reform::is_zero(&self.id)
    }
}

/// The table id_only, for [IdOnly].
pub struct IdOnlyTable {
    descriptor: ::reform::RecordDescriptor,
}

::reform::lazy_static! {
    pub static ref ID_ONLY_TABLE: IdOnlyTable = {
        static FIELDS: [::reform::FieldDescriptor; 1] = [
            ::reform::FieldDescriptor::new_static("id", "i32", "id", true),
        ];
        let descriptor = ::reform::RecordDescriptor::new_static(
            "IdOnly",
            None,
            "id_only",
            &FIELDS,
            Some(0),
        );
        ::reform::assert_up_to_date::<IdOnly>(&descriptor);
        IdOnlyTable { descriptor }
    };
}

impl ::reform::View for IdOnlyTable {
    fn descriptor(&self) -> &::reform::RecordDescriptor {
        &self.descriptor
    }

    fn new_struct(&self) -> ::std::boxed::Box<dyn ::reform::Struct> {
        ::std::boxed::Box::new(<IdOnly as ::std::default::Default>::default())
    }
}

impl ::reform::Table for IdOnlyTable {
    fn new_record(&self) -> ::std::boxed::Box<dyn ::reform::Record> {
        ::std::boxed::Box::new(<IdOnly as ::std::default::Default>::default())
    }

    fn pk_column_index(&self) -> usize {
        0
    }
}

impl ::reform::Struct for IdOnly {
    fn view(&self) -> &'static dyn ::reform::View {
        &*ID_ONLY_TABLE
    }

    fn values(&self) -> ::std::vec::Vec<::reform::Value> {
        ::std::vec![
            ::reform::ToValue::to_value(&self.id),
        ]
    }

    fn pointers(&mut self) -> ::std::vec::Vec<&mut dyn ::reform::Scan> {
        ::std::vec![
            &mut self.id as &mut dyn ::reform::Scan,
        ]
    }

    fn as_record(&self) -> ::std::option::Option<&dyn ::reform::Record> {
        ::std::option::Option::Some(self)
    }

    fn as_record_mut(&mut self) -> ::std::option::Option<&mut dyn ::reform::Record> {
        ::std::option::Option::Some(self)
    }

    fn as_before_insert(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeInsert> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasBeforeInsert as _, NoBeforeInsert as _};
        ::reform::detect::Detect(self).before_insert_hook()
    }

    fn as_before_update(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeUpdate> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasBeforeUpdate as _, NoBeforeUpdate as _};
        ::reform::detect::Detect(self).before_update_hook()
    }

    fn as_after_find(&mut self) -> ::std::option::Option<&mut dyn ::reform::AfterFind> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasAfterFind as _, NoAfterFind as _};
        ::reform::detect::Detect(self).after_find_hook()
    }
}

impl ::reform::Record for IdOnly {
    fn table(&self) -> &'static dyn ::reform::Table {
        &*ID_ONLY_TABLE
    }

    fn pk_value(&self) -> ::reform::Value {
        ::reform::ToValue::to_value(&self.id)
    }

    fn pk_pointer(&mut self) -> &mut dyn ::reform::Scan {
        &mut self.id
    }

    fn has_pk(&self) -> bool {
        !::reform::is_zero(&self.id)
    }
}

/// The table extra, for [Extra].
pub struct ExtraTable {
    descriptor: ::reform::RecordDescriptor,
}

::reform::lazy_static! {
    pub static ref EXTRA_TABLE: ExtraTable = {
        static FIELDS: [::reform::FieldDescriptor; 4] = [
            ::reform::FieldDescriptor::new_static("id", "i64", "id", true),
            ::reform::FieldDescriptor::new_static("name", "Option<String>", "name", false),
            ::reform::FieldDescriptor::new_static("byte", "u8", "byte", false),
            ::reform::FieldDescriptor::new_static("bytes", "Vec<u8>", "bytes", false),
        ];
        let descriptor = ::reform::RecordDescriptor::new_static(
            "Extra",
            None,
            "extra",
            &FIELDS,
            Some(0),
        );
        ::reform::assert_up_to_date::<Extra>(&descriptor);
        ExtraTable { descriptor }
    };
}

impl ::reform::View for ExtraTable {
    fn descriptor(&self) -> &::reform::RecordDescriptor {
        &self.descriptor
    }

    fn new_struct(&self) -> ::std::boxed::Box<dyn ::reform::Struct> {
        ::std::boxed::Box::new(<Extra as ::std::default::Default>::default())
    }
}

impl ::reform::Table for ExtraTable {
    fn new_record(&self) -> ::std::boxed::Box<dyn ::reform::Record> {
        ::std::boxed::Box::new(<Extra as ::std::default::Default>::default())
    }

    fn pk_column_index(&self) -> usize {
        0
    }
}

impl ::reform::Struct for Extra {
    fn view(&self) -> &'static dyn ::reform::View {
        &*EXTRA_TABLE
    }

    fn values(&self) -> ::std::vec::Vec<::reform::Value> {
        ::std::vec![
            ::reform::ToValue::to_value(&self.id),
            ::reform::ToValue::to_value(&self.name),
            ::reform::ToValue::to_value(&self.byte),
            ::reform::ToValue::to_value(&self.bytes),
        ]
    }

    fn pointers(&mut self) -> ::std::vec::Vec<&mut dyn ::reform::Scan> {
        ::std::vec![
            &mut self.id as &mut dyn ::reform::Scan,
            &mut self.name as &mut dyn ::reform::Scan,
            &mut self.byte as &mut dyn ::reform::Scan,
            &mut self.bytes as &mut dyn ::reform::Scan,
        ]
    }

    fn as_record(&self) -> ::std::option::Option<&dyn ::reform::Record> {
        ::std::option::Option::Some(self)
    }

    fn as_record_mut(&mut self) -> ::std::option::Option<&mut dyn ::reform::Record> {
        ::std::option::Option::Some(self)
    }

    fn as_before_insert(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeInsert> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasBeforeInsert as _, NoBeforeInsert as _};
        ::reform::detect::Detect(self).before_insert_hook()
    }

    fn as_before_update(&mut self) -> ::std::option::Option<&mut dyn ::reform::BeforeUpdate> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasBeforeUpdate as _, NoBeforeUpdate as _};
        ::reform::detect::Detect(self).before_update_hook()
    }

    fn as_after_find(&mut self) -> ::std::option::Option<&mut dyn ::reform::AfterFind> {
        #[allow(unused_imports)]
        use ::reform::detect::{HasAfterFind as _, NoAfterFind as _};
        ::reform::detect::Detect(self).after_find_hook()
    }
}

impl ::reform::Record for Extra {
    fn table(&self) -> &'static dyn ::reform::Table {
        &*EXTRA_TABLE
    }

    fn pk_value(&self) -> ::reform::Value {
        ::reform::ToValue::to_value(&self.id)
    }

    fn pk_pointer(&mut self) -> &mut dyn ::reform::Scan {
        &mut self.id
    }

    fn has_pk(&self) -> bool {
        !::reform::is_zero(&self.id)
    }
}
