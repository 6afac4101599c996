use log::debug;

use crate::ast::ast::{File, FuncDecl};

use super::{address::Address, stmt::gen_block};

/// `Q<address> PROCEDURE &name&`, the body one level down, then `ENDPROC`
/// back at the procedure's own address.
pub fn gen_procedure(declaration: &FuncDecl, address: &Address) -> String {
    let name = &declaration.name.name;

    let mut code = address.line('Q', &format!("PROCEDURE &{}&", name));
    let (body, _) = gen_block(&declaration.body, address.child());
    code.push_str(&body);
    code.push_str(&address.line('Q', &format!("ENDPROC &{}&", name)));

    code
}

/// Turns a checked tree into address lines.
///
/// The tree must be free of syntax and semantic errors; nothing here checks.
pub fn generate(file: &File) -> String {
    let package = file.package.as_ref().map_or("", |package| package.name.as_str());
    let mut code = format!("Z1 {}\n", package);

    let mut address = Address::new(vec![1, 1]);
    for declaration in file.declarations.iter() {
        code.push_str(&gen_procedure(declaration, &address));
        address = address.next_sibling();
    }

    debug!("generated {} lines", code.lines().count());
    code
}
