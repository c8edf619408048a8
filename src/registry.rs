//! TypeRegistry - a static-table type-introspection provider.
//!
//! The binder consumes introspection through the [`TypeIntrospection`]
//! contract; this registry implements it for a closed type universe.
//! Entries are registered up front and never mutated afterwards, so one
//! registry can back any number of concurrent binding passes.
//!
//! Array types are structural: the registry synthesizes a rank-ary
//! `Get(int, ...) -> element` method for any array type, so multi-dim
//! indexing resolves through the ordinary overload path.

use rustc_hash::FxHashMap;

use exprbind_core::{
    DataType, FieldDef, MemberFilter, MethodDef, TypeHash, TypeIntrospection, Visibility,
    primitives,
};

/// A registered type: qualified name, members, and default indexer names.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub name: String,
    pub type_hash: TypeHash,
    pub methods: Vec<MethodDef>,
    pub fields: Vec<FieldDef>,
    pub default_members: Vec<String>,
}

impl TypeEntry {
    /// A new entry; the type hash is derived from the qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            methods: Vec::new(),
            fields: Vec::new(),
            default_members: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare a default indexer member name (e.g. `Item`).
    pub fn with_default_member(mut self, name: impl Into<String>) -> Self {
        self.default_members.push(name.into());
        self
    }

    pub fn data_type(&self) -> DataType {
        DataType::simple(self.type_hash)
    }
}

/// FxHashMap-backed registry of type entries.
pub struct TypeRegistry {
    entries: FxHashMap<TypeHash, TypeEntry>,
    by_name: FxHashMap<String, TypeHash>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            by_name: FxHashMap::default(),
        }
    }

    /// A registry preloaded with the builtin primitive type names, so
    /// diagnostics and name lookups cover them.
    pub fn with_primitives() -> Self {
        let mut registry = Self::new();
        for (name, hash) in primitives::NAMES {
            let entry = TypeEntry {
                name: (*name).to_string(),
                type_hash: *hash,
                methods: Vec::new(),
                fields: Vec::new(),
                default_members: Vec::new(),
            };
            registry.register(entry);
        }
        registry
    }

    /// Register a type entry, replacing any previous entry of the same hash.
    pub fn register(&mut self, entry: TypeEntry) {
        self.by_name.insert(entry.name.clone(), entry.type_hash);
        self.entries.insert(entry.type_hash, entry);
    }

    pub fn get(&self, type_hash: TypeHash) -> Option<&TypeEntry> {
        self.entries.get(&type_hash)
    }

    /// Exact-name lookup of a registered type.
    pub fn type_by_name(&self, name: &str) -> Option<DataType> {
        self.by_name.get(name).map(|hash| DataType::simple(*hash))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeIntrospection for TypeRegistry {
    fn methods(&self, data_type: DataType, filter: MemberFilter, is_static: bool) -> Vec<MethodDef> {
        if data_type.is_array() {
            if is_static || !filter.allows(Visibility::Public) {
                return Vec::new();
            }
            return vec![MethodDef::new(
                "Get",
                vec![DataType::int32(); data_type.rank as usize],
                data_type.element(),
            )];
        }

        let Some(entry) = self.get(data_type.type_hash) else {
            return Vec::new();
        };
        entry
            .methods
            .iter()
            .filter(|m| m.is_static == is_static && filter.allows(m.visibility))
            .cloned()
            .collect()
    }

    fn field(
        &self,
        data_type: DataType,
        name: &str,
        case_sensitive: bool,
        filter: MemberFilter,
        is_static: bool,
    ) -> Option<FieldDef> {
        if data_type.is_array() {
            return None;
        }
        let entry = self.get(data_type.type_hash)?;
        entry
            .fields
            .iter()
            .find(|f| {
                f.is_static == is_static
                    && filter.allows(f.visibility)
                    && if case_sensitive {
                        f.name == name
                    } else {
                        f.name.eq_ignore_ascii_case(name)
                    }
            })
            .cloned()
    }

    fn type_by_name(&self, name: &str) -> Option<DataType> {
        TypeRegistry::type_by_name(self, name)
    }

    fn default_members(&self, data_type: DataType) -> Vec<String> {
        if data_type.is_array() {
            return Vec::new();
        }
        self.get(data_type.type_hash)
            .map(|entry| entry.default_members.clone())
            .unwrap_or_default()
    }

    fn type_name(&self, data_type: DataType) -> String {
        let base = self
            .get(data_type.type_hash)
            .map(|entry| entry.name.clone())
            .unwrap_or_else(|| format!("{}", data_type.type_hash));
        if data_type.is_array() {
            format!("{}[{}]", base, ",".repeat(data_type.rank as usize - 1))
        } else {
            base
        }
    }
}
