//! Item lookup, extent computation and reference discovery.

use std::collections::{HashSet, VecDeque};

use proc_macro2::{LineColumn, Span};
use syn::visit::Visit;

use crate::{EmbedError, SourceUnit};

/// Return the source text of the top-level function `name` in `unit`.
///
/// The text runs from the function's first non-doc attribute (or, without
/// one, its visibility or `fn` keyword) to the closing brace of its body.
/// Doc comments above the first kept attribute are not included.
///
/// # Errors
///
/// [`EmbedError::Parse`] if the unit does not parse,
/// [`EmbedError::FunctionNotFound`] if it has no such function.
pub fn func_source_code(unit: &SourceUnit, name: &str) -> Result<String, EmbedError> {
    let file = unit.parse()?;
    let index = UnitIndex::new(&file);
    let lines = LineIndex::new(unit.text());

    let func = index.find_fn(name).ok_or_else(|| not_found(unit, name))?;
    let (start, end) = fn_extent(func);
    tracing::debug!(
        unit = %unit.path().display(),
        function = name,
        start_line = start.line,
        end_line = end.line,
        "Extracted function source"
    );
    Ok(lines.slice(start, end).to_string())
}

/// Return the source of `name` followed by every top-level item of the same
/// unit it references, transitively.
///
/// Functions referenced by call or by name are included, as are `struct` and
/// `enum` items together with their `impl` blocks. Each item appears once, in
/// the order it was first discovered, separated by a blank line. Macro
/// arguments are followed only when they parse as comma-separated expressions.
pub fn all_func_source_code(unit: &SourceUnit, name: &str) -> Result<String, EmbedError> {
    let file = unit.parse()?;
    let index = UnitIndex::new(&file);
    let lines = LineIndex::new(unit.text());

    if index.find_fn(name).is_none() {
        return Err(not_found(unit, name));
    }

    let root = ItemRef::Fn(name.to_string());
    let mut seen = HashSet::from([root.clone()]);
    let mut queue = VecDeque::from([root]);
    let mut chunks: Vec<&str> = Vec::new();

    while let Some(next) = queue.pop_front() {
        let mut refs = ReferenceCollector::new(&index);
        match &next {
            ItemRef::Fn(fn_name) => {
                let Some(func) = index.find_fn(fn_name) else {
                    continue;
                };
                let (start, end) = fn_extent(func);
                chunks.push(lines.slice(start, end));
                refs.visit_item_fn(func);
            }
            ItemRef::Type(type_name) => {
                let Some(ty) = index.find_type(type_name) else {
                    continue;
                };
                let (start, end) = ty.extent();
                chunks.push(lines.slice(start, end));
                ty.visit_with(&mut refs);
                for imp in index.impls_of(type_name) {
                    let (start, end) = impl_extent(imp);
                    chunks.push(lines.slice(start, end));
                    refs.visit_item_impl(imp);
                }
            }
        }
        tracing::debug!(unit = %unit.path().display(), item = ?next, "Embedded item");

        for found in refs.found {
            if seen.insert(found.clone()) {
                queue.push_back(found);
            }
        }
    }

    Ok(chunks.join("\n\n"))
}

fn not_found(unit: &SourceUnit, name: &str) -> EmbedError {
    EmbedError::FunctionNotFound {
        path: unit.path().to_path_buf(),
        name: name.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ItemRef {
    Fn(String),
    Type(String),
}

enum TypeItem<'a> {
    Struct(&'a syn::ItemStruct),
    Enum(&'a syn::ItemEnum),
}

impl TypeItem<'_> {
    fn ident(&self) -> &syn::Ident {
        match self {
            TypeItem::Struct(s) => &s.ident,
            TypeItem::Enum(e) => &e.ident,
        }
    }

    fn extent(&self) -> (LineColumn, LineColumn) {
        match self {
            TypeItem::Struct(s) => {
                let start = attr_span(&s.attrs)
                    .or_else(|| vis_span(&s.vis))
                    .unwrap_or(s.struct_token.span);
                let end = match (&s.semi_token, &s.fields) {
                    (Some(semi), _) => semi.spans[0],
                    (None, syn::Fields::Named(named)) => named.brace_token.span.close(),
                    (None, _) => s.ident.span(),
                };
                (start.start(), end.end())
            }
            TypeItem::Enum(e) => {
                let start = attr_span(&e.attrs)
                    .or_else(|| vis_span(&e.vis))
                    .unwrap_or(e.enum_token.span);
                (start.start(), e.brace_token.span.close().end())
            }
        }
    }

    fn visit_with(&self, refs: &mut ReferenceCollector<'_, '_>) {
        match self {
            TypeItem::Struct(s) => refs.visit_item_struct(s),
            TypeItem::Enum(e) => refs.visit_item_enum(e),
        }
    }
}

/// Top-level items of one unit. Nested modules are not indexed.
struct UnitIndex<'a> {
    fns: Vec<&'a syn::ItemFn>,
    types: Vec<TypeItem<'a>>,
    impls: Vec<&'a syn::ItemImpl>,
}

impl<'a> UnitIndex<'a> {
    fn new(file: &'a syn::File) -> Self {
        let mut index = UnitIndex {
            fns: Vec::new(),
            types: Vec::new(),
            impls: Vec::new(),
        };
        for item in &file.items {
            match item {
                syn::Item::Fn(f) => index.fns.push(f),
                syn::Item::Struct(s) => index.types.push(TypeItem::Struct(s)),
                syn::Item::Enum(e) => index.types.push(TypeItem::Enum(e)),
                syn::Item::Impl(i) => index.impls.push(i),
                _ => {}
            }
        }
        index
    }

    fn find_fn(&self, name: &str) -> Option<&'a syn::ItemFn> {
        self.fns.iter().copied().find(|f| f.sig.ident == name)
    }

    fn find_type(&self, name: &str) -> Option<&TypeItem<'a>> {
        self.types.iter().find(|t| *t.ident() == name)
    }

    fn impls_of<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'a syn::ItemImpl> + 's {
        self.impls.iter().copied().filter(move |imp| match &*imp.self_ty {
            syn::Type::Path(tp) => tp.path.segments.last().is_some_and(|s| s.ident == name),
            _ => false,
        })
    }

    /// Map a path to the unit item it names, if any.
    ///
    /// `foo` resolves to a function or type, `Foo::Bar` to the type `Foo`.
    fn resolve(&self, path: &syn::Path) -> Option<ItemRef> {
        if path.leading_colon.is_some() {
            return None;
        }
        let first = path.segments.first()?.ident.to_string();
        if path.segments.len() == 1 && self.find_fn(&first).is_some() {
            return Some(ItemRef::Fn(first));
        }
        if self.find_type(&first).is_some() {
            return Some(ItemRef::Type(first));
        }
        None
    }
}

struct ReferenceCollector<'i, 'a> {
    index: &'i UnitIndex<'a>,
    found: Vec<ItemRef>,
}

impl<'i, 'a> ReferenceCollector<'i, 'a> {
    fn new(index: &'i UnitIndex<'a>) -> Self {
        ReferenceCollector {
            index,
            found: Vec::new(),
        }
    }
}

impl<'ast> Visit<'ast> for ReferenceCollector<'_, '_> {
    fn visit_path(&mut self, path: &'ast syn::Path) {
        if let Some(item) = self.index.resolve(path) {
            if !self.found.contains(&item) {
                self.found.push(item);
            }
        }
        syn::visit::visit_path(self, path);
    }

    // `format!`, `write!`, `vec!` and friends take comma-separated expressions.
    fn visit_macro(&mut self, mac: &'ast syn::Macro) {
        syn::visit::visit_macro(self, mac);
        if let Ok(args) = mac.parse_body_with(
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated,
        ) {
            for arg in &args {
                <Self as Visit<'_>>::visit_expr(self, arg);
            }
        }
    }
}

/// `#` of the first outer attribute that is not a doc comment.
///
/// Doc comments ahead of it are dropped; `derive`, `cfg`, `inline` and the
/// like stay with the item they change.
fn attr_span(attrs: &[syn::Attribute]) -> Option<Span> {
    attrs
        .iter()
        .filter(|attr| matches!(attr.style, syn::AttrStyle::Outer))
        .find(|attr| !attr.path().is_ident("doc"))
        .map(|attr| attr.pound_token.spans[0])
}

fn vis_span(vis: &syn::Visibility) -> Option<Span> {
    match vis {
        syn::Visibility::Public(token) => Some(token.span),
        syn::Visibility::Restricted(restricted) => Some(restricted.pub_token.span),
        syn::Visibility::Inherited => None,
    }
}

fn fn_extent(func: &syn::ItemFn) -> (LineColumn, LineColumn) {
    let sig = &func.sig;
    let start = attr_span(&func.attrs)
        .or_else(|| vis_span(&func.vis))
        .or(sig.constness.map(|t| t.span))
        .or(sig.asyncness.map(|t| t.span))
        .or(sig.unsafety.map(|t| t.span))
        .or(sig.abi.as_ref().map(|abi| abi.extern_token.span))
        .unwrap_or(sig.fn_token.span);
    (start.start(), func.block.brace_token.span.close().end())
}

fn impl_extent(imp: &syn::ItemImpl) -> (LineColumn, LineColumn) {
    let start = attr_span(&imp.attrs)
        .or(imp.defaultness.map(|t| t.span))
        .or(imp.unsafety.map(|t| t.span))
        .unwrap_or(imp.impl_token.span);
    (start.start(), imp.brace_token.span.close().end())
}

/// Byte offsets of line starts, for turning span positions into slices.
struct LineIndex<'t> {
    text: &'t str,
    starts: Vec<usize>,
}

impl<'t> LineIndex<'t> {
    fn new(text: &'t str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        LineIndex { text, starts }
    }

    /// Lines are 1-based, columns count chars from 0.
    fn offset(&self, at: LineColumn) -> usize {
        let Some(&line_start) = self.starts.get(at.line.saturating_sub(1)) else {
            return self.text.len();
        };
        self.text[line_start..]
            .char_indices()
            .nth(at.column)
            .map_or(self.text.len(), |(i, _)| line_start + i)
    }

    fn slice(&self, start: LineColumn, end: LineColumn) -> &'t str {
        &self.text[self.offset(start)..self.offset(end)]
    }
}
