//! Rust source rendering.
//!
//! Every contract module has the same layout:
//! - a `sol!` interface declaring its structs, errors, events and functions
//! - a `*_META_DATA` static embedding the ABI and deploy bytecode
//! - a wrapper type with constructors, deployment, escape hatches, one
//!   accessor per function and a filter, watch and parse trio per event

use crate::{
    abi::{overload_names, Contract, Event, Function, Param},
    naming::{self, RESERVED_METHODS},
    types,
};
use eyre::{bail, Result};
use std::{collections::BTreeMap, fmt::Write};

/// Widest line the output keeps, as rustfmt does.
const MAX_WIDTH: usize = 100;
/// Widest argument list, array or method chain kept on one line.
const SHORT_WIDTH: usize = 60;
/// Widest struct literal body kept on one line.
const STRUCT_LIT_WIDTH: usize = 18;
/// Indent of declarations inside the `sol!` interface.
const SOL_INDENT: usize = 8;

const HEADER: &str = "use alloy_primitives::Address;
use bind::{
    Backends, BoundContract, ContractBackend, ContractCaller, ContractFilterer, ContractMetaData,
    ContractTransactor, Result, SignedTransaction, TransactOpts,
};
use std::sync::Arc;
";

/// Render the module of one contract.
pub fn contract(contract: &Contract, include_dir: &str) -> Result<String> {
    let interface = contract.interface();
    let meta = format!("{}_META_DATA", naming::screaming_snake_case(&contract.name));
    let mut out = String::new();

    writeln!(out, "//! Bindings for the `{}` contract.", contract.name)?;
    writeln!(out, "//!")?;
    writeln!(
        out,
        "//! Code generated by bindgen from `{}`. DO NOT EDIT.",
        contract.abi_file
    )?;
    writeln!(out)?;
    out.push_str(HEADER);
    writeln!(out)?;

    sol_interface(&mut out, contract)?;
    writeln!(out)?;

    writeln!(out, "/// ABI and deploy bytecode of `{}`.", contract.name)?;
    writeln!(
        out,
        "pub static {meta}: ContractMetaData = ContractMetaData::new("
    )?;
    writeln!(
        out,
        "    include_str!(\"{include_dir}/{}\"),",
        contract.abi_file
    )?;
    match &contract.bin_file {
        Some(bin) => writeln!(out, "    include_str!(\"{include_dir}/{bin}\"),")?,
        None => writeln!(out, "    \"\",")?,
    }
    writeln!(out, ");")?;
    writeln!(out)?;

    wrapper(&mut out, contract, &interface, &meta)?;
    Ok(out)
}

/// Render the module index listing every generated contract.
///
/// `modules` holds `(module, contract)` name pairs.
pub fn index(modules: &[(String, String)]) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "//! Contract bindings.")?;
    writeln!(out, "//!")?;
    writeln!(out, "//! Code generated by bindgen. DO NOT EDIT.")?;
    writeln!(out)?;

    let mut modules = modules.to_vec();
    modules.sort();
    for (module, _) in &modules {
        writeln!(out, "pub mod {module};")?;
    }
    writeln!(out)?;
    for (module, name) in &modules {
        let mut items = vec![format!("I{name}"), name.clone()];
        items.sort();
        items.push(format!("{}_META_DATA", naming::screaming_snake_case(name)));

        let line = format!("pub use {module}::{{{}}};", items.join(", "));
        if line.len() <= MAX_WIDTH {
            writeln!(out, "{line}")?;
            continue;
        }
        writeln!(out, "pub use {module}::{{")?;
        let mut row = String::new();
        for item in &items {
            if !row.is_empty() && 4 + row.len() + item.len() + 2 > MAX_WIDTH {
                writeln!(out, "    {row}")?;
                row.clear();
            }
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(item);
            row.push(',');
        }
        writeln!(out, "    {row}")?;
        writeln!(out, "}};")?;
    }
    Ok(out)
}

/// Collect the structs referenced by tuple parameters, keyed by name.
fn collect_structs<'a>(
    params: impl Iterator<Item = &'a Param>,
    structs: &mut BTreeMap<String, &'a [Param]>,
) -> Result<()> {
    for param in params {
        if !param.is_tuple() {
            continue;
        }
        collect_structs(param.components.iter(), structs)?;

        let name = param.struct_name()?.to_string();
        match structs.get(&name) {
            Some(existing) if *existing != param.components.as_slice() => {
                bail!("conflicting definitions of struct `{name}`")
            }
            Some(_) => {}
            None => {
                structs.insert(name, &param.components);
            }
        }
    }
    Ok(())
}

fn sol_params(params: &[Param], location: bool, indexed: bool) -> Result<Vec<String>> {
    let mut decls = Vec::with_capacity(params.len());
    for param in params {
        let mut decl = types::sol_decl(param)?;
        if location && types::is_reference(param) {
            decl.push_str(" memory");
        }
        if indexed && param.indexed {
            decl.push_str(" indexed");
        }
        if !param.name.is_empty() {
            decl.push(' ');
            decl.push_str(&param.name);
        }
        decls.push(decl);
    }
    Ok(decls)
}

/// Lay out one `sol!` declaration, splitting it when it does not fit.
///
/// A long parameter list goes one per line. With `stacked`, `attrs` get a
/// line each instead of trailing the closing parenthesis.
fn sol_item(head: &str, params: &[String], attrs: &[&str], stacked: bool) -> Vec<String> {
    let suffix: String = attrs.iter().map(|attr| format!(" {attr}")).collect();
    let joined = params.join(", ");
    let line = format!("{head}({joined}){suffix};");
    if SOL_INDENT + line.len() <= MAX_WIDTH {
        return vec![line];
    }

    let close = if stacked { String::new() } else { format!("{suffix};") };
    let mut lines = Vec::new();
    let flat = format!("{head}({joined}){close}");
    if SOL_INDENT + flat.len() <= MAX_WIDTH {
        lines.push(flat);
    } else {
        lines.push(format!("{head}("));
        let last = params.len().saturating_sub(1);
        for (i, param) in params.iter().enumerate() {
            let comma = if i < last { "," } else { "" };
            lines.push(format!("    {param}{comma}"));
        }
        lines.push(format!("){close}"));
    }
    if stacked {
        lines.extend(attrs.iter().map(|attr| format!("    {attr}")));
        if let Some(last) = lines.last_mut() {
            last.push(';');
        }
    }
    lines
}

fn sol_interface(out: &mut String, contract: &Contract) -> Result<()> {
    let mut structs = BTreeMap::new();
    if let Some(constructor) = &contract.constructor {
        collect_structs(constructor.inputs.iter(), &mut structs)?;
    }
    for function in &contract.functions {
        collect_structs(function.inputs.iter().chain(&function.outputs), &mut structs)?;
    }
    for event in &contract.events {
        collect_structs(event.inputs.iter(), &mut structs)?;
    }
    for error in &contract.errors {
        collect_structs(error.inputs.iter(), &mut structs)?;
    }

    let mut blocks: Vec<Vec<String>> = Vec::new();
    for (name, fields) in &structs {
        let mut block = vec![format!("struct {name} {{")];
        for field in fields.iter() {
            block.push(format!("    {} {};", types::sol_decl(field)?, field.name));
        }
        block.push("}".to_string());
        blocks.push(block);
    }

    let mut errors = Vec::new();
    for error in &contract.errors {
        let params = sol_params(&error.inputs, false, false)?;
        errors.extend(sol_item(&format!("error {}", error.name), &params, &[], false));
    }
    let mut events = Vec::new();
    for event in &contract.events {
        let params = sol_params(&event.inputs, false, true)?;
        let attrs: &[&str] = if event.anonymous { &["anonymous"] } else { &[] };
        events.extend(sol_item(&format!("event {}", event.name), &params, attrs, false));
    }
    let mut functions = Vec::new();
    for function in &contract.functions {
        let params = sol_params(&function.inputs, true, false)?;
        let mut attrs = vec!["external".to_string()];
        let keyword = function.state_mutability.keyword();
        if !keyword.is_empty() {
            attrs.push(keyword.to_string());
        }
        if !function.outputs.is_empty() {
            let outputs = sol_params(&function.outputs, true, false)?;
            attrs.push(format!("returns ({})", outputs.join(", ")));
        }
        let attrs: Vec<&str> = attrs.iter().map(String::as_str).collect();
        let head = format!("function {}", function.name);
        functions.extend(sol_item(&head, &params, &attrs, true));
    }

    blocks.extend([errors, events, functions].into_iter().filter(|b| !b.is_empty()));

    writeln!(out, "alloy_sol_types::sol! {{")?;
    writeln!(out, "    #[derive(Debug, PartialEq, Eq)]")?;
    writeln!(out, "    interface {} {{", contract.interface())?;
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        for line in block {
            writeln!(out, "        {line}")?;
        }
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Parameter list of the `Solidity:` line in accessor docs.
fn doc_params(params: &[Param], indexed: bool) -> String {
    params
        .iter()
        .map(|param| {
            let mut doc = types::canonical(param);
            if indexed && param.indexed {
                doc.push_str(" indexed");
            }
            if !param.name.is_empty() {
                doc.push(' ');
                doc.push_str(&param.name);
            }
            doc
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn function_doc(function: &Function) -> String {
    let keyword = function.state_mutability.keyword();
    let outputs = doc_params(&function.outputs, false);
    format!(
        "function {}({}) {}{}returns({outputs})",
        function.name,
        doc_params(&function.inputs, false),
        keyword,
        if keyword.is_empty() { "" } else { " " },
    )
}

fn event_doc(event: &Event) -> String {
    format!(
        "event {}({}){}",
        event.name,
        doc_params(&event.inputs, true),
        if event.anonymous { " anonymous" } else { "" }
    )
}

/// Field initialisers of a `sol!` call struct.
fn field_inits(params: &[Param], args: &[String]) -> Vec<String> {
    params
        .iter()
        .zip(args)
        .enumerate()
        .map(|(i, (param, arg))| {
            let field = if param.name.is_empty() {
                format!("_{i}")
            } else {
                param.name.clone()
            };
            if field == *arg {
                field
            } else {
                format!("{field}: {arg}")
            }
        })
        .collect()
}

/// Expression building a `sol!` call struct.
enum CallInit {
    /// Fits on the line of the call.
    Line(String),
    /// Named fields, one per line.
    Fields(Vec<String>),
}

/// `sol!` declares a unit struct for a call without inputs and a tuple
/// struct for a single unnamed input.
fn call_init(call: &str, params: &[Param], args: &[String]) -> CallInit {
    match (params, args) {
        ([], _) => return CallInit::Line(call.to_string()),
        ([param], [arg]) if param.name.is_empty() => {
            return CallInit::Line(format!("{call}({arg})"));
        }
        _ => {}
    }
    let fields = field_inits(params, args);
    let body = fields.join(", ");
    if body.len() <= STRUCT_LIT_WIDTH {
        CallInit::Line(format!("{call} {{ {body} }}"))
    } else {
        CallInit::Fields(fields)
    }
}

/// Write `text` as a doc comment, wrapping between words.
fn doc_comment(out: &mut String, text: &str) -> Result<()> {
    const PREFIX: &str = "    /// ";
    let mut line = PREFIX.to_string();
    for piece in text.split_inclusive(' ') {
        if line.len() > PREFIX.len() && line.len() + piece.trim_end().len() > MAX_WIDTH {
            writeln!(out, "{}", line.trim_end())?;
            line.truncate(PREFIX.len());
        }
        line.push_str(piece);
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// Write a function signature, one parameter per line when it does not fit.
fn signature(out: &mut String, head: &str, params: &[String], ret: &str) -> Result<()> {
    let line = format!("    {head}({}) -> {ret} {{", params.join(", "));
    if line.len() <= MAX_WIDTH {
        writeln!(out, "{line}")?;
        return Ok(());
    }
    writeln!(out, "    {head}(")?;
    for param in params {
        writeln!(out, "        {param},")?;
    }
    writeln!(out, "    ) -> {ret} {{")?;
    Ok(())
}

/// Delimited items on one line when short, else one per line.
///
/// `indent` is the indent of the line `open` starts.
fn list(indent: usize, open: &str, items: &[String], close: &str) -> String {
    let joined = items.join(", ");
    if !joined.contains('\n')
        && joined.len() <= SHORT_WIDTH
        && indent + open.len() + joined.len() + close.len() <= MAX_WIDTH
    {
        return format!("{open}{joined}{close}");
    }
    let pad = " ".repeat(indent);
    let mut out = format!("{open}\n");
    for item in items {
        out.push_str(&format!("{pad}    {item},\n"));
    }
    out.push_str(&format!("{pad}{close}"));
    out
}

/// A method chain on one line when short, else one link per line.
fn chain(indent: usize, receiver: &str, links: &[String]) -> String {
    let line = format!("{receiver}{}", links.concat());
    if !line.contains('\n') && line.len() <= SHORT_WIDTH {
        return line;
    }
    let pad = " ".repeat(indent + 4);
    let mut out = receiver.to_string();
    for link in links {
        out.push_str(&format!("\n{pad}{link}"));
    }
    out
}

fn wrapper(out: &mut String, contract: &Contract, interface: &str, meta: &str) -> Result<()> {
    let name = &contract.name;

    writeln!(out, "/// Binding for a deployed `{name}` contract.")?;
    writeln!(out, "#[derive(Debug, Clone)]")?;
    writeln!(out, "pub struct {name} {{")?;
    writeln!(out, "    contract: BoundContract,")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl {name} {{")?;

    write!(
        out,
        "    /// Bind to `address` with every capability of `backend`.
    pub fn new<B: ContractBackend + 'static>(address: Address, backend: &Arc<B>) -> Result<Self> {{
        Self::bind(address, Backends::full(backend))
    }}

    /// Bind read-only access to `address`.
    pub fn new_caller<B: ContractCaller + 'static>(
        address: Address,
        caller: &Arc<B>,
    ) -> Result<Self> {{
        Self::bind(address, Backends::caller(caller))
    }}

    /// Bind write-only access to `address`.
    pub fn new_transactor<B: ContractTransactor + 'static>(
        address: Address,
        transactor: &Arc<B>,
    ) -> Result<Self> {{
        Self::bind(address, Backends::transactor(transactor))
    }}

    /// Bind log access to `address`.
    pub fn new_filterer<B: ContractFilterer + 'static>(
        address: Address,
        filterer: &Arc<B>,
    ) -> Result<Self> {{
        Self::bind(address, Backends::filterer(filterer))
    }}

    /// Bind to `address` with an explicit set of capabilities.
    pub fn bind(address: Address, backends: Backends) -> Result<Self> {{
        let abi = {meta}.get_abi()?;
        Ok(Self {{
            contract: BoundContract::new(address, abi, backends),
        }})
    }}
"
    )?;

    if contract.bin_file.is_some() {
        deploy(out, contract, interface, meta)?;
    }

    write!(
        out,
        "
    pub const fn address(&self) -> Address {{
        self.contract.address()
    }}

    /// Untyped access by method name.
    pub const fn raw(&self) -> &BoundContract {{
        &self.contract
    }}

    /// Pin call and transaction options for repeated use.
    pub fn session(
        &self,
        call_opts: bind::CallOpts,
        transact_opts: TransactOpts,
    ) -> bind::Session<'_, Self> {{
        bind::Session::new(self, call_opts, transact_opts)
    }}

    /// Send `opts.value` with empty calldata.
    pub async fn transfer(&self, opts: &TransactOpts) -> Result<SignedTransaction> {{
        self.contract.transfer(opts).await
    }}
"
    )?;

    if contract.has_fallback {
        write!(
            out,
            "
    /// Send `calldata` to the fallback function.
    pub async fn fallback(
        &self,
        opts: &TransactOpts,
        calldata: alloy_primitives::Bytes,
    ) -> Result<SignedTransaction> {{
        self.contract.fallback(opts, calldata).await
    }}
"
        )?;
    }

    let function_idents = overload_names(contract.functions.iter().map(|f| f.name.as_str()));
    let event_idents = overload_names(contract.events.iter().map(|e| e.name.as_str()));

    let mut candidates = Vec::new();
    for ident in &function_idents {
        let snake = naming::escape_keyword(naming::snake_case(ident));
        let verbatim = snake == *ident;
        candidates.push((snake, verbatim));
    }
    for ident in &event_idents {
        let snake = naming::snake_case(ident);
        for prefix in ["filter", "watch", "parse"] {
            candidates.push((format!("{prefix}_{snake}"), false));
        }
    }
    let mut accessors = naming::resolve(&candidates, RESERVED_METHODS).into_iter();

    for (function, ident) in contract.functions.iter().zip(&function_idents) {
        let Some(accessor) = accessors.next() else {
            bail!("accessor names exhausted");
        };
        method(out, interface, function, ident, &accessor)?;
    }
    for (event, ident) in contract.events.iter().zip(&event_idents) {
        let (Some(filter), Some(watch), Some(parse)) =
            (accessors.next(), accessors.next(), accessors.next())
        else {
            bail!("accessor names exhausted");
        };
        event_accessors(
            out,
            interface,
            event,
            ident,
            [filter.as_str(), watch.as_str(), parse.as_str()],
        )?;
    }

    writeln!(out, "}}")?;
    Ok(())
}

fn deploy(out: &mut String, contract: &Contract, interface: &str, meta: &str) -> Result<()> {
    let inputs = contract
        .constructor
        .as_ref()
        .map_or(&[][..], |c| c.inputs.as_slice());

    writeln!(out)?;
    writeln!(out, "    /// Deploy a new `{}` and bind to it.", contract.name)?;
    if let Some(constructor) = &contract.constructor {
        writeln!(out, "    ///")?;
        let params = doc_params(&constructor.inputs, false);
        doc_comment(out, &format!("Solidity: constructor({params})"))?;
    }

    let args = naming::arg_names(
        inputs.iter().map(|p| p.name.as_str()),
        &["opts", "backend", "values", "args", "address", "tx", "contract"],
    );
    let mut params = vec!["opts: &TransactOpts".to_string(), "backend: &Arc<B>".to_string()];
    for (param, arg) in inputs.iter().zip(&args) {
        params.push(format!("{arg}: {}", types::rust_type(param, interface)?));
    }
    signature(
        out,
        "pub async fn deploy<B: ContractBackend + 'static>",
        &params,
        "Result<(Address, SignedTransaction, Self)>",
    )?;

    if inputs.is_empty() {
        writeln!(out, "        let (address, tx, contract) = bind::deploy_encoded(")?;
        writeln!(out, "            opts,")?;
        writeln!(out, "            &{meta},")?;
        writeln!(out, "            backend,")?;
        writeln!(out, "            alloy_primitives::Bytes::new(),")?;
        writeln!(out, "        )")?;
        writeln!(out, "        .await?;")?;
    } else {
        let values = match args.as_slice() {
            [arg] => format!("let values = ({arg},);"),
            _ => list(8, "let values = (", &args, ");"),
        };
        writeln!(out, "        {values}")?;
        writeln!(out, "        let args = <(")?;
        for param in inputs {
            writeln!(out, "            {},", types::sol_data_type(param, interface)?)?;
        }
        writeln!(
            out,
            "        ) as alloy_sol_types::SolType>::abi_encode_params(&values);"
        )?;
        writeln!(out, "        let (address, tx, contract) =")?;
        writeln!(
            out,
            "            bind::deploy_encoded(opts, &{meta}, backend, args.into()).await?;"
        )?;
    }
    writeln!(out, "        Ok((address, tx, Self {{ contract }}))")?;
    writeln!(out, "    }}")?;
    Ok(())
}

fn method(
    out: &mut String,
    interface: &str,
    function: &Function,
    ident: &str,
    accessor: &str,
) -> Result<()> {
    let (builder, constructor) = if function.state_mutability.is_view() {
        ("CallBuilder", "view")
    } else {
        ("TransactBuilder", "method")
    };
    let call = format!("{interface}::{ident}Call");
    let args = naming::arg_names(function.inputs.iter().map(|p| p.name.as_str()), &[]);
    let mut params = vec!["&self".to_string()];
    for (param, arg) in function.inputs.iter().zip(&args) {
        params.push(format!("{arg}: {}", types::rust_type(param, interface)?));
    }

    writeln!(out)?;
    doc_comment(out, &format!("Solidity: {}", function_doc(function)))?;
    signature(
        out,
        &format!("pub fn {accessor}"),
        &params,
        &format!("bind::{builder}<'_, {call}>"),
    )?;
    match call_init(&call, &function.inputs, &args) {
        CallInit::Line(init) => {
            let link = format!(".{constructor}({init})");
            writeln!(out, "        {}", chain(8, "self.contract", &[link]))?;
        }
        CallInit::Fields(fields) => {
            writeln!(out, "        self.contract.{constructor}({call} {{")?;
            for field in fields {
                writeln!(out, "            {field},")?;
            }
            writeln!(out, "        }})")?;
        }
    }
    writeln!(out, "    }}")?;
    Ok(())
}

fn event_accessors(
    out: &mut String,
    interface: &str,
    event: &Event,
    ident: &str,
    [filter, watch, parse]: [&str; 3],
) -> Result<()> {
    let record = format!("{interface}::{ident}");
    let indexed: Vec<&Param> = event.inputs.iter().filter(|p| p.indexed).collect();
    let args = naming::arg_names(indexed.iter().map(|p| p.name.as_str()), &["opts", "sink"]);

    let mut topic_params = Vec::new();
    for (param, arg) in indexed.iter().zip(&args) {
        topic_params.push(format!("{arg}: &[{}]", types::topic_type(param, interface)?));
    }
    let topics = if args.is_empty() {
        "Vec::new()".to_string()
    } else {
        let sets: Vec<_> = args.iter().map(|a| format!("bind::topic_set({a})")).collect();
        list(16, "vec![", &sets, "]")
    };
    let doc = format!("Solidity: {}", event_doc(event));
    let typed = format!(".event::<{record}>()");

    writeln!(out)?;
    doc_comment(out, &doc)?;
    let mut params = vec!["&self".to_string(), "opts: &bind::FilterOpts".to_string()];
    params.extend(topic_params.iter().cloned());
    signature(
        out,
        &format!("pub async fn {filter}"),
        &params,
        &format!("Result<bind::EventIterator<{record}>>"),
    )?;
    let links = [
        typed.clone(),
        list(12, ".filter(", &["opts".to_string(), topics.clone()], ")"),
        ".await".to_string(),
    ];
    writeln!(out, "        {}", chain(8, "self.contract", &links))?;
    writeln!(out, "    }}")?;

    writeln!(out)?;
    doc_comment(out, &doc)?;
    let mut params = vec![
        "&self".to_string(),
        "opts: &bind::WatchOpts".to_string(),
        format!("sink: bind::EventSink<{record}>"),
    ];
    params.extend(topic_params);
    signature(
        out,
        &format!("pub async fn {watch}"),
        &params,
        "Result<bind::EventSubscription>",
    )?;
    let watch_args = ["opts".to_string(), "sink".to_string(), topics];
    let links = [
        typed.clone(),
        list(12, ".watch(", &watch_args, ")"),
        ".await".to_string(),
    ];
    writeln!(out, "        {}", chain(8, "self.contract", &links))?;
    writeln!(out, "    }}")?;

    writeln!(out)?;
    doc_comment(out, &doc)?;
    signature(
        out,
        &format!("pub fn {parse}"),
        &["&self".to_string(), "log: &bind::Log".to_string()],
        &format!("Result<bind::Decoded<{record}>>"),
    )?;
    let links = [typed, ".parse(log)".to_string()];
    writeln!(out, "        {}", chain(8, "self.contract", &links))?;
    writeln!(out, "    }}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABI: &str = r#"[
        {"type":"function","name":"VERSION","inputs":[],"outputs":[{"name":"","type":"uint256","internalType":"uint256"}],"stateMutability":"view"},
        {"type":"function","name":"version","inputs":[],"outputs":[{"name":"","type":"string","internalType":"string"}],"stateMutability":"view"},
        {"type":"function","name":"setFoo","inputs":[{"name":"_foo","type":"uint256","internalType":"uint256"}],"outputs":[],"stateMutability":"nonpayable"},
        {"type":"event","name":"Forwarded","inputs":[{"name":"callHash","type":"bytes32","indexed":true,"internalType":"bytes32"},{"name":"data","type":"bytes","indexed":false,"internalType":"bytes"}],"anonymous":false}
    ]"#;

    fn render() -> String {
        let contract = Contract::from_abi("Foo", "Foo.abi.json", ABI).unwrap();
        super::contract(&contract, "../artifacts").unwrap()
    }

    #[test]
    fn test_interface_declarations() {
        let out = render();
        assert!(out.contains("    interface IFoo {\n"));
        assert!(out.contains("        event Forwarded(bytes32 indexed callHash, bytes data);\n"));
        assert!(out.contains("        function VERSION() external view returns (uint256);\n"));
        assert!(out.contains("        function setFoo(uint256 _foo) external;\n"));
        assert!(out.contains("        function version() external view returns (string memory);\n"));
    }

    #[test]
    fn test_accessor_names() {
        let out = render();
        assert!(out.contains("    pub fn version(&self) -> bind::CallBuilder<'_, IFoo::versionCall> {\n"));
        assert!(out.contains("    pub fn version_1(&self) -> bind::CallBuilder<'_, IFoo::VERSIONCall> {\n"));
        assert!(out.contains("self.contract.method(IFoo::setFooCall { _foo: foo })"));
        assert!(out.contains("    /// Solidity: function setFoo(uint256 _foo) returns()\n"));
        assert!(out.contains("    pub async fn filter_forwarded(\n"));
        assert!(out.contains("        call_hash: &[alloy_primitives::B256],\n"));
        assert!(out.contains(".filter(opts, vec![bind::topic_set(call_hash)])"));
    }

    #[test]
    fn test_call_struct_shapes() {
        let abi = r#"[
            {"type":"function","name":"sentMessages","inputs":[{"name":"","type":"bytes32","internalType":"bytes32"}],"outputs":[{"name":"","type":"bool","internalType":"bool"}],"stateMutability":"view"},
            {"type":"function","name":"version","inputs":[],"outputs":[{"name":"","type":"string","internalType":"string"}],"stateMutability":"view"},
            {"type":"function","name":"pair","inputs":[{"name":"","type":"uint256","internalType":"uint256"},{"name":"","type":"uint256","internalType":"uint256"}],"outputs":[],"stateMutability":"nonpayable"}
        ]"#;
        let contract = Contract::from_abi("Foo", "Foo.abi.json", abi).unwrap();
        let out = super::contract(&contract, "../artifacts").unwrap();

        assert!(out.contains("        self.contract.view(IFoo::sentMessagesCall(arg0))\n"));
        assert!(out.contains("        self.contract.view(IFoo::versionCall)\n"));
        assert!(out.contains("        self.contract.method(IFoo::pairCall { _0: arg0, _1: arg1 })\n"));
    }

    #[test]
    fn test_long_lines_are_wrapped() {
        let abi = r#"[
            {"type":"function","name":"relayMessage","inputs":[{"name":"_destination","type":"uint256"},{"name":"_nonce","type":"uint256"},{"name":"_sender","type":"address"},{"name":"_target","type":"address"},{"name":"_value","type":"uint256"},{"name":"_message","type":"bytes"}],"outputs":[],"stateMutability":"nonpayable"},
            {"type":"function","name":"CROSS_DOMAIN_MESSAGE_SENDER_SLOT","inputs":[],"outputs":[{"name":"","type":"bytes32"}],"stateMutability":"view"},
            {"type":"event","name":"WithdrawalInitiated","inputs":[{"name":"nonce","type":"uint256","indexed":true},{"name":"sender","type":"address","indexed":true},{"name":"target","type":"address","indexed":true},{"name":"value","type":"uint256","indexed":false},{"name":"gasLimit","type":"uint256","indexed":false},{"name":"data","type":"bytes","indexed":false}],"anonymous":false}
        ]"#;
        let contract =
            Contract::from_abi("L2ToL2CrossDomainMessenger", "Messenger.abi.json", abi).unwrap();
        let out = super::contract(&contract, "../artifacts").unwrap();

        for line in out.lines() {
            assert!(line.len() <= MAX_WIDTH, "{} columns: {line}", line.len());
        }
        assert!(out.contains("        function relayMessage(\n            uint256 _destination,\n"));
        assert!(out.contains("            bytes memory _message\n        )\n            external;\n"));
        assert!(out.contains("        event WithdrawalInitiated(\n"));
        assert!(out.contains("            bytes data\n        );\n"));
        assert!(out.contains("    pub fn cross_domain_message_sender_slot(\n        &self,\n    ) -> "));
        assert!(out.contains(
            "        self.contract.method(IL2ToL2CrossDomainMessenger::relayMessageCall {\n            _destination: destination,\n"
        ));
        assert!(out.contains("            _message: message,\n        })\n"));
        assert!(out.contains(
            "            .filter(\n                opts,\n                vec![\n                    bind::topic_set(nonce),\n"
        ));
        assert!(out.contains("    /// Solidity: function relayMessage(uint256 _destination, "));
    }

    #[test]
    fn test_metadata_without_bytecode() {
        let out = render();
        assert!(out.contains("pub static FOO_META_DATA: ContractMetaData = ContractMetaData::new(\n"));
        assert!(out.contains("    include_str!(\"../artifacts/Foo.abi.json\"),\n    \"\",\n"));
        assert!(!out.contains("pub async fn deploy"));
        assert!(!out.contains("pub async fn fallback"));
    }

    #[test]
    fn test_index() {
        let out = index(&[
            ("multicall3".to_string(), "Multicall3".to_string()),
            (
                "l2_to_l2_cross_domain_messenger".to_string(),
                "L2ToL2CrossDomainMessenger".to_string(),
            ),
        ])
        .unwrap();
        assert!(out.contains("pub mod l2_to_l2_cross_domain_messenger;\npub mod multicall3;\n"));
        assert!(out.contains("pub use multicall3::{IMulticall3, Multicall3, MULTICALL3_META_DATA};\n"));
        assert!(out.contains(
            "pub use l2_to_l2_cross_domain_messenger::{\n    IL2ToL2CrossDomainMessenger, L2ToL2CrossDomainMessenger,\n    L2_TO_L2_CROSS_DOMAIN_MESSENGER_META_DATA,\n};\n"
        ));
    }
}
