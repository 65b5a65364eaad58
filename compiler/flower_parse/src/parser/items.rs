//! Statements: imports, exports, and declarations.

use flower_ir::{
    ClassDecl, EnumDecl, EnumMember, ExportAssignment, ExportDecl, ExportSpecifier, FunctionDecl,
    ImportBindings, ImportDecl, ImportSpecifier, InterfaceDecl, Modifiers, NamespaceBody,
    NamespaceDecl, Span, Stmt, StmtKind, TypeAliasDecl, TypeParam, VariableDecl, VariableKind,
};

use super::Parser;
use crate::{ParseError, TokenKind};

/// Words that can start a declaration after `export`/`declare`.
const DECLARATION_WORDS: &[&str] = &[
    "type",
    "interface",
    "class",
    "abstract",
    "enum",
    "const",
    "let",
    "var",
    "namespace",
    "module",
    "function",
    "declare",
];

impl Parser<'_> {
    /// Parse statements up to end of input, or up to (not including) `}`
    /// when `in_block` is set.
    pub(super) fn parse_statements(&mut self, in_block: bool) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        loop {
            if self.cursor.is_at_end() {
                if in_block {
                    return Err(self.cursor.unexpected(TokenKind::RBrace.describe()));
                }
                break;
            }
            if in_block && self.cursor.check(TokenKind::RBrace) {
                break;
            }
            if self.cursor.eat(TokenKind::Semi) {
                continue;
            }
            statements.push(self.parse_stmt()?);
        }
        Ok(statements)
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();

        if self.cursor.check_word("import") {
            let decl = self.import_decl()?;
            return Ok(self.finish(StmtKind::Import(decl), Modifiers::empty(), start));
        }

        let mut modifiers = Modifiers::empty();
        if self.cursor.eat_word("export") {
            if let Some(kind) = self.export_form()? {
                return Ok(self.finish(kind, Modifiers::empty(), start));
            }
            modifiers |= Modifiers::EXPORT;
            if self.cursor.eat_word("default") {
                modifiers |= Modifiers::DEFAULT;
                if !self.at_declaration() {
                    let expression = self.entity_name()?;
                    self.eat_semi();
                    let kind = StmtKind::ExportAssignment(ExportAssignment {
                        is_export_equals: false,
                        expression,
                    });
                    return Ok(self.finish(kind, Modifiers::empty(), start));
                }
            }
        }

        if self.cursor.eat_word("declare") {
            modifiers |= Modifiers::DECLARE;
            if self.cursor.check_word("global") && self.cursor.peek_nth(1) == Some(TokenKind::LBrace)
            {
                self.cursor.advance();
                let body = self.block()?;
                return Ok(self.finish(StmtKind::GlobalAugmentation(body), modifiers, start));
            }
        }

        let kind = self.declaration()?;
        Ok(self.finish(kind, modifiers, start))
    }

    fn finish(&self, kind: StmtKind, modifiers: Modifiers, start: Span) -> Stmt {
        Stmt {
            kind,
            modifiers,
            span: self.span_from(start),
        }
    }

    fn at_declaration(&self) -> bool {
        DECLARATION_WORDS
            .iter()
            .any(|word| self.cursor.check_word(word))
    }

    /// `{ statements }`
    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        let statements = self.parse_statements(true)?;
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(statements)
    }

    fn import_decl(&mut self) -> Result<ImportDecl, ParseError> {
        self.cursor.expect_word("import")?;

        if self.cursor.check(TokenKind::String) {
            let module = self.string_lit()?;
            self.eat_semi();
            return Ok(ImportDecl {
                type_only: false,
                default: None,
                bindings: None,
                module,
            });
        }

        let type_only = self.cursor.check_word("type")
            && !self.cursor.check_word_nth(1, "from")
            && self.cursor.peek_nth(1) != Some(TokenKind::Comma);
        if type_only {
            self.cursor.advance();
        }

        let mut default = None;
        let mut bindings = None;
        if self.cursor.check(TokenKind::Word) {
            default = Some(self.ident()?);
            if self.cursor.eat(TokenKind::Comma) {
                bindings = Some(self.import_bindings()?);
            }
        } else {
            bindings = Some(self.import_bindings()?);
        }

        self.cursor.expect_word("from")?;
        let module = self.string_lit()?;
        self.eat_semi();

        Ok(ImportDecl {
            type_only,
            default,
            bindings,
            module,
        })
    }

    fn import_bindings(&mut self) -> Result<ImportBindings, ParseError> {
        if self.cursor.eat(TokenKind::Star) {
            self.cursor.expect_word("as")?;
            return Ok(ImportBindings::Namespace(self.ident()?));
        }

        self.cursor.expect(TokenKind::LBrace)?;
        let mut specifiers = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            let type_only =
                self.cursor.check_word("type") && self.cursor.peek_nth(1) == Some(TokenKind::Word);
            if type_only {
                self.cursor.advance();
            }
            let first = self.ident()?;
            let (property_name, name) = if self.cursor.eat_word("as") {
                (Some(first), self.ident()?)
            } else {
                (None, first)
            };
            specifiers.push(ImportSpecifier {
                property_name,
                name,
                type_only,
            });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(ImportBindings::Named(specifiers))
    }

    /// The forms of `export` that are statements in their own right rather
    /// than a modifier on a declaration.
    fn export_form(&mut self) -> Result<Option<StmtKind>, ParseError> {
        if self.cursor.check(TokenKind::LBrace) {
            return self.export_decl(false).map(Some);
        }
        if self.cursor.check_word("type") && self.cursor.peek_nth(1) == Some(TokenKind::LBrace) {
            self.cursor.advance();
            return self.export_decl(true).map(Some);
        }
        if self.cursor.eat(TokenKind::Eq) {
            let expression = self.entity_name()?;
            self.eat_semi();
            return Ok(Some(StmtKind::ExportAssignment(ExportAssignment {
                is_export_equals: true,
                expression,
            })));
        }
        if self.cursor.check(TokenKind::Star) {
            return Err(ParseError::new(
                "`export *` is not supported",
                self.cursor.current_span(),
            ));
        }
        if self.cursor.check_word("as") && self.cursor.check_word_nth(1, "namespace") {
            return Err(ParseError::new(
                "`export as namespace` is not supported",
                self.cursor.current_span(),
            ));
        }
        Ok(None)
    }

    fn export_decl(&mut self, type_only: bool) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        let mut specifiers = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            // A per-specifier `type` changes nothing for type-level names.
            if self.cursor.check_word("type") && self.cursor.peek_nth(1) == Some(TokenKind::Word) {
                self.cursor.advance();
            }
            let first = self.ident()?;
            let (property_name, name) = if self.cursor.eat_word("as") {
                (Some(first), self.ident()?)
            } else {
                (None, first)
            };
            specifiers.push(ExportSpecifier {
                property_name,
                name,
            });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBrace)?;

        let module = if self.cursor.eat_word("from") {
            Some(self.string_lit()?)
        } else {
            None
        };
        self.eat_semi();

        Ok(StmtKind::Export(ExportDecl {
            type_only,
            specifiers,
            module,
        }))
    }

    fn declaration(&mut self) -> Result<StmtKind, ParseError> {
        if !self.cursor.check(TokenKind::Word) {
            return Err(self.cursor.unexpected("declaration"));
        }
        match self.cursor.text_nth(0) {
            "type" => {
                self.cursor.advance();
                self.type_alias().map(StmtKind::TypeAlias)
            }
            "interface" => {
                self.cursor.advance();
                self.interface().map(StmtKind::Interface)
            }
            "abstract" => {
                self.cursor.advance();
                self.cursor.expect_word("class")?;
                self.class().map(StmtKind::Class)
            }
            "class" => {
                self.cursor.advance();
                self.class().map(StmtKind::Class)
            }
            "enum" => {
                self.cursor.advance();
                self.enum_decl(false).map(StmtKind::Enum)
            }
            "const" if self.cursor.check_word_nth(1, "enum") => {
                self.cursor.advance();
                self.cursor.advance();
                self.enum_decl(true).map(StmtKind::Enum)
            }
            "var" | "let" | "const" => self.variable().map(StmtKind::Variable),
            "namespace" | "module" => {
                self.cursor.advance();
                if self.cursor.check(TokenKind::String) {
                    return Err(ParseError::new(
                        "ambient module declarations are not supported",
                        self.cursor.current_span(),
                    ));
                }
                self.namespace().map(StmtKind::Namespace)
            }
            "function" => {
                self.cursor.advance();
                self.function().map(StmtKind::Function)
            }
            _ => Err(self.cursor.unexpected("declaration")),
        }
    }

    /// `<T extends C = D, ...>`, or nothing.
    pub(super) fn type_params(&mut self) -> Result<Vec<TypeParam>, ParseError> {
        let mut params = Vec::new();
        if !self.cursor.eat(TokenKind::Lt) {
            return Ok(params);
        }
        while !self.cursor.check(TokenKind::Gt) {
            let name = self.ident()?;
            let constraint = if self.cursor.eat_word("extends") {
                Some(self.parse_type()?)
            } else {
                None
            };
            let default = if self.cursor.eat(TokenKind::Eq) {
                Some(self.parse_type()?)
            } else {
                None
            };
            params.push(TypeParam {
                name,
                constraint,
                default,
            });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::Gt)?;
        Ok(params)
    }

    fn type_alias(&mut self) -> Result<TypeAliasDecl, ParseError> {
        let name = self.ident()?;
        let type_params = self.type_params()?;
        self.cursor.expect(TokenKind::Eq)?;
        let ty = self.parse_type()?;
        self.eat_semi();
        Ok(TypeAliasDecl {
            name,
            type_params,
            ty,
        })
    }

    fn interface(&mut self) -> Result<InterfaceDecl, ParseError> {
        let name = self.ident()?;
        let type_params = self.type_params()?;
        let mut extends = Vec::new();
        if self.cursor.eat_word("extends") {
            loop {
                extends.push(self.type_reference()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let members = self.member_block()?;
        Ok(InterfaceDecl {
            name,
            type_params,
            extends,
            members,
        })
    }

    fn class(&mut self) -> Result<ClassDecl, ParseError> {
        let name = self.ident()?;
        let type_params = self.type_params()?;
        let extends = if self.cursor.eat_word("extends") {
            Some(self.type_reference()?)
        } else {
            None
        };
        let mut implements = Vec::new();
        if self.cursor.eat_word("implements") {
            loop {
                implements.push(self.type_reference()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let members = self.member_block()?;
        Ok(ClassDecl {
            name,
            type_params,
            extends,
            implements,
            members,
        })
    }

    fn enum_decl(&mut self, is_const: bool) -> Result<EnumDecl, ParseError> {
        let name = self.ident()?;
        self.cursor.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            let member_name = self.property_name()?;
            let initializer = if self.cursor.eat(TokenKind::Eq) {
                Some(self.literal()?)
            } else {
                None
            };
            members.push(EnumMember {
                name: member_name,
                initializer,
            });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(EnumDecl {
            name,
            is_const,
            members,
        })
    }

    /// `A { ... }` or `A.B.C { ... }`, after `namespace`/`module`.
    fn namespace(&mut self) -> Result<NamespaceDecl, ParseError> {
        let name = self.ident()?;
        let body = if self.cursor.eat(TokenKind::Dot) {
            NamespaceBody::Nested(Box::new(self.namespace()?))
        } else {
            NamespaceBody::Block(self.block()?)
        };
        Ok(NamespaceDecl { name, body })
    }

    fn variable(&mut self) -> Result<VariableDecl, ParseError> {
        let kind = match self.cursor.text_nth(0) {
            "var" => VariableKind::Var,
            "let" => VariableKind::Let,
            _ => VariableKind::Const,
        };
        self.cursor.advance();
        let name = self.ident()?;
        let ty = if self.cursor.eat(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let initializer = if self.cursor.eat(TokenKind::Eq) {
            Some(self.literal()?)
        } else {
            None
        };
        if self.cursor.check(TokenKind::Comma) {
            return Err(ParseError::new(
                "multiple declarators in one statement are not supported",
                self.cursor.current_span(),
            ));
        }
        self.eat_semi();
        Ok(VariableDecl {
            kind,
            name,
            ty,
            initializer,
        })
    }

    fn function(&mut self) -> Result<FunctionDecl, ParseError> {
        let name = self.ident()?;
        let signature = self.signature(TokenKind::Colon)?;
        self.eat_semi();
        Ok(FunctionDecl { name, signature })
    }
}
