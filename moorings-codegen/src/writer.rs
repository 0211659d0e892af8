//! Code generation writer

use crate::catalog::{CatalogDefinition, TableDefinition};
use crate::resolver;
use anyhow::Context;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

const GENERATED_HEADER: &str = "// Generated by moorings-codegen - do not edit manually.\n\n";

pub struct TableWriter {
    krate: syn::Path,
}

impl TableWriter {
    /// A writer emitting modules that import from the `moorings` crate.
    pub fn new() -> Self {
        Self {
            krate: syn::parse_quote!(moorings),
        }
    }

    /// A writer emitting modules that import from a different path, e.g.
    /// `crate` when the generated modules live inside moorings itself.
    pub fn with_crate_path(path: &str) -> anyhow::Result<Self> {
        let krate = syn::parse_str::<syn::Path>(path)
            .with_context(|| format!("'{path}' is not a valid crate path"))?;
        Ok(Self { krate })
    }

    /// Generate the `keys` module holding every primary and foreign key
    /// static of the catalog.
    pub fn generate_keys_module(&self, catalog: &CatalogDefinition) -> anyhow::Result<String> {
        let krate = &self.krate;
        let schema = &catalog.schema;

        let pk_statics = catalog.tables.iter().map(|table| {
            let pk_ident = format_ident!("{}", table.primary_key.name);
            let pk_name = &table.primary_key.name;
            let pk_columns = key_columns_tokens(&table.primary_key.columns);
            let doc = format!(" The primary key of `{schema}.{}`.", table.name);
            quote! {
                #[doc = #doc]
                pub static #pk_ident: Lazy<PrimaryKeyDef> =
                    Lazy::new(|| PrimaryKeyDef::new(#pk_name, #pk_columns));
            }
        });

        let fk_statics = catalog.tables.iter().flat_map(|table| {
            let table_name = table.name.clone();
            table.foreign_keys.iter().map(move |fk| {
                let fk_ident = format_ident!("{}", fk.name);
                let fk_name = &fk.name;
                let fk_table = &table_name;
                let fk_columns = key_columns_tokens(&fk.columns);
                let ref_table = &fk.references_table;
                let ref_columns = key_columns_tokens(&fk.references_columns);
                let doc = format!(
                    " The foreign key `{schema}.{fk_table}.{}` -> `{schema}.{ref_table}.{}`.",
                    fk.columns.join(", "),
                    fk.references_columns.join(", "),
                );
                quote! {
                    #[doc = #doc]
                    pub static #fk_ident: Lazy<ForeignKeyDef> = Lazy::new(|| {
                        ForeignKeyDef::new(
                            #fk_name,
                            #fk_table,
                            #fk_columns,
                            #ref_table,
                            #ref_columns,
                        )
                    });
                }
            })
        });

        let code = quote! {
            use once_cell::sync::Lazy;

            use #krate::{ForeignKeyDef, KeyColumns, PrimaryKeyDef};

            #(#pk_statics)*
            #(#fk_statics)*
        };

        let formatted = format_code(&code.to_string())?;
        Ok(format!("{GENERATED_HEADER}{formatted}"))
    }

    /// Generate the descriptor module for one table: table struct, typed
    /// column accessors and memoized foreign key navigation.
    pub fn generate_table_module(
        &self,
        catalog: &CatalogDefinition,
        table: &TableDefinition,
    ) -> anyhow::Result<String> {
        let krate = &self.krate;
        let schema = &catalog.schema;
        let table_name = &table.name;
        let type_ident = format_ident!("{}", resolver::pascal_case(table_name));
        let static_ident = format_ident!("{}", table_name);
        let has_fks = !table.foreign_keys.is_empty();

        let once_cell_use = if has_fks {
            quote! { use once_cell::sync::{Lazy, OnceCell}; }
        } else {
            quote! { use once_cell::sync::Lazy; }
        };

        // One import per referenced sibling module; self references need none.
        let mut seen_targets = Vec::new();
        let target_uses = table
            .foreign_keys
            .iter()
            .filter(|fk| fk.references_table != *table_name)
            .filter(|fk| {
                if seen_targets.contains(&fk.references_table) {
                    false
                } else {
                    seen_targets.push(fk.references_table.clone());
                    true
                }
            })
            .map(|fk| {
                let module = format_ident!("{}", fk.references_table.to_lowercase());
                let target = format_ident!("{}", resolver::pascal_case(&fk.references_table));
                quote! { use super::#module::#target; }
            })
            .collect::<Vec<_>>();

        let column_defs = table
            .columns
            .iter()
            .map(|column| {
                let name = &column.name;
                let sql_type = resolver::sql_type_tokens(&column.type_str)?;
                let mut def = quote! { ColumnDef::new(#name, #sql_type) };
                if column.identity {
                    def = quote! { #def.identity() };
                } else if column.nullable {
                    def = quote! { #def.nullable() };
                }
                if let Some(default) = &column.default {
                    def = quote! { #def.default_expr(#default) };
                }
                Ok(def)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let pk_ident = format_ident!("{}", table.primary_key.name);
        let fk_idents = table
            .foreign_keys
            .iter()
            .map(|fk| format_ident!("{}", fk.name))
            .collect::<Vec<_>>();

        let fk_fields = table.foreign_keys.iter().map(|fk| {
            let field = format_ident!("{}", fk.name.to_lowercase());
            let target = format_ident!("{}", resolver::pascal_case(&fk.references_table));
            quote! { #field: OnceCell<Box<#target>>, }
        });

        let fk_field_inits = table.foreign_keys.iter().map(|fk| {
            let field = format_ident!("{}", fk.name.to_lowercase());
            quote! { #field: OnceCell::new(), }
        });

        let column_accessors = table
            .columns
            .iter()
            .map(|column| {
                let fn_ident = format_ident!("{}", resolver::accessor_name(&column.name));
                let column_name = &column.name;
                let value_type = resolver::value_type_tokens(&column.type_str, column.nullable)?;
                let doc = format!(" The column `{schema}.{table_name}.{column_name}`.");
                Ok(quote! {
                    #[doc = #doc]
                    pub fn #fn_ident(&self) -> TypedColumn<#value_type> {
                        self.table.typed(#column_name)
                    }
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let fk_accessors = table.foreign_keys.iter().map(|fk| {
            let fn_ident = format_ident!("{}", fk.name.to_lowercase());
            let fk_ident = format_ident!("{}", fk.name);
            let target = format_ident!("{}", resolver::pascal_case(&fk.references_table));
            let doc = format!(
                " The `{schema}.{}` table reached via `{}`, memoized after first access.",
                fk.references_table, fk.name
            );
            quote! {
                #[doc = #doc]
                pub fn #fn_ident(&self) -> &#target {
                    &**self
                        .#fn_ident
                        .get_or_init(|| Box::new(#target::path(&self.table, &keys::#fk_ident)))
                }
            }
        });

        let static_doc = format!(" The reference instance of `{schema}.{table_name}`.");
        let struct_doc = format!(" The table `{schema}.{table_name}`.");
        let new_doc = format!(" A `{schema}.{table_name}` table reference.");
        let aliased_doc = format!(" An aliased `{schema}.{table_name}` table reference.");
        let path_doc =
            format!(" A `{schema}.{table_name}` path instance, reached from `child` via `fk`.");

        let code = quote! {
            #once_cell_use
            use std::sync::Arc;

            use super::keys;
            #(#target_uses)*
            use #krate::{
                ColumnDef, ForeignKeyDef, PrimaryKeyDef, SqlType, Table, TableDescriptor,
                TableMeta, TypedColumn,
            };

            static META: Lazy<Arc<TableMeta>> = Lazy::new(|| {
                TableMeta::new(
                    Some(#schema),
                    #table_name,
                    vec![ #(#column_defs),* ],
                    PrimaryKeyDef::clone(&keys::#pk_ident),
                    vec![ #(ForeignKeyDef::clone(&keys::#fk_idents)),* ],
                )
            });

            #[doc = #static_doc]
            pub static #static_ident: Lazy<#type_ident> = Lazy::new(#type_ident::new);

            #[doc = #struct_doc]
            #[derive(Debug, Clone)]
            pub struct #type_ident {
                table: Table,
                #(#fk_fields)*
            }

            impl #type_ident {
                fn from_table(table: Table) -> Self {
                    Self {
                        table,
                        #(#fk_field_inits)*
                    }
                }

                #[doc = #new_doc]
                pub fn new() -> Self {
                    Self::from_table(Table::base(Arc::clone(&META)))
                }

                #[doc = #aliased_doc]
                pub fn aliased(alias: &str) -> Self {
                    Self::from_table(Table::aliased(Arc::clone(&META), alias))
                }

                #[doc = #path_doc]
                pub fn path(child: &Table, fk: &ForeignKeyDef) -> Self {
                    Self::from_table(Table::path(Arc::clone(&META), child, fk))
                }

                /// A new instance of this table under a different alias.
                pub fn alias_as(&self, alias: &str) -> Self {
                    Self::from_table(self.table.alias_as(alias))
                }

                /// Rename this table; returns a new instance.
                pub fn rename(&self, name: &str) -> Self {
                    Self::from_table(self.table.rename(name))
                }

                #(#column_accessors)*
                #(#fk_accessors)*
            }

            impl Default for #type_ident {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl TableDescriptor for #type_ident {
                fn as_table(&self) -> &Table {
                    &self.table
                }
            }
        };

        let formatted = format_code(&code.to_string())?;
        Ok(format!("{GENERATED_HEADER}{formatted}"))
    }

    /// Generate the root `mod.rs` declaring the table modules, the `keys`
    /// module, and the schema static.
    pub fn generate_root_module(&self, catalog: &CatalogDefinition) -> anyhow::Result<String> {
        let krate = &self.krate;
        let schema = &catalog.schema;
        let schema_ident = format_ident!("{}", schema.to_uppercase());

        let mut module_names = catalog
            .tables
            .iter()
            .map(|t| t.name.to_lowercase())
            .collect::<Vec<_>>();
        module_names.push("keys".to_string());
        module_names.sort();

        let modules = module_names.iter().map(|name| {
            let ident = format_ident!("{}", name);
            quote! { pub mod #ident; }
        });

        let schema_doc = format!(" The `{schema}` schema.");
        let code = quote! {
            #(#modules)*

            use #krate::SchemaDef;

            #[doc = #schema_doc]
            pub static #schema_ident: SchemaDef = SchemaDef::new(#schema);
        };

        let formatted = format_code(&code.to_string())?;
        Ok(format!("{GENERATED_HEADER}{formatted}"))
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn key_columns_tokens(columns: &[String]) -> TokenStream {
    match columns {
        [single] => quote! { KeyColumns::Unary(#single) },
        [first, second] => quote! { KeyColumns::Binary(#first, #second) },
        many => quote! { KeyColumns::Many(vec![#(#many),*]) },
    }
}

/// Format Rust code using rustfmt
fn format_code(code: &str) -> anyhow::Result<String> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    // Try to use rustfmt if available
    let mut child = match Command::new("rustfmt")
        .args(["--edition", "2021", "--emit", "stdout"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(_) => {
            // rustfmt not available, try cargo fmt
            return format_with_cargo_fmt(code);
        }
    };

    // Write code to rustfmt stdin
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(code.as_bytes())?;
        stdin.flush()?;
    }

    let output = child.wait_with_output()?;

    if output.status.success() {
        Ok(String::from_utf8(output.stdout)?)
    } else {
        // rustfmt failed, try cargo fmt or return unformatted
        format_with_cargo_fmt(code)
    }
}

/// Format code using cargo fmt (fallback)
fn format_with_cargo_fmt(code: &str) -> anyhow::Result<String> {
    use std::fs;
    use std::process::Command;

    // Create a temporary file
    let temp_dir = std::env::temp_dir();
    let temp_file = temp_dir.join(format!("moorings_codegen_{}.rs", std::process::id()));

    // Write code to temp file
    fs::write(&temp_file, code)?;

    // Try cargo fmt
    let output = Command::new("cargo")
        .args(["fmt", "--"])
        .arg(&temp_file)
        .output();

    match output {
        Ok(result) if result.status.success() => {
            // Read formatted code
            let formatted = fs::read_to_string(&temp_file)?;
            fs::remove_file(&temp_file).ok(); // Clean up
            Ok(formatted)
        }
        _ => {
            // Both rustfmt and cargo fmt failed, return unformatted
            fs::remove_file(&temp_file).ok(); // Clean up
            Ok(code.to_string())
        }
    }
}
