use super::object::{Object, ObjectId, ObjectKind, ParamMode, ScopeId};
use super::types::{ConstantValue, Type};
use crate::reporter::{CompileError, CompileResult, ErrorKind};
use crate::utils::Span;
use std::collections::HashMap;
use tracing::debug;

// --- 1. Scope 定义 ---

/// 一个词法作用域：属于某个程序/函数/过程（最外层的全局作用域不属于任何对象），
/// 按声明顺序保存对象，并指向外层作用域。
#[derive(Debug, Clone, Default)]
pub struct Scope {
    owner: Option<ObjectId>,
    outer: Option<ScopeId>,
    objects: Vec<ObjectId>,
    names: HashMap<String, ObjectId>,
}

impl Scope {
    pub fn owner(&self) -> Option<ObjectId> {
        self.owner
    }

    pub fn outer(&self) -> Option<ScopeId> {
        self.outer
    }

    /// 按声明顺序排列的对象。
    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    fn find(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }
}

// --- 2. SymbolTable 定义 ---

/// 符号表，负责管理作用域和对象的定义与查找。
///
/// 作用域和对象都放在竞技场（`Vec`）里，用句柄互相引用；`outer` 链从当前作用域
/// 经过全局作用域一直连到运行时作用域，构成完整的词法环境。退出的作用域不会被销毁，
/// 所以解析结束后整棵声明树仍然可以遍历（例如打印）。
#[derive(Debug)]
pub struct SymbolTable {
    objects: Vec<Object>,
    scopes: Vec<Scope>,
    /// 只放预声明的运行时例程，位于全局作用域之外。
    runtime: ScopeId,
    global: ScopeId,
    current: ScopeId,
    program: Option<ObjectId>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// 创建一个新的符号表：空的全局作用域，外层是装着 KPL 运行时例程的作用域。
    ///
    /// 程序名声明在全局作用域里，所以它可以和运行时例程同名。
    pub fn new() -> Self {
        let runtime = ScopeId(0);
        let global = ScopeId(1);
        let mut table = Self {
            objects: Vec::new(),
            scopes: vec![
                Scope::default(),
                Scope {
                    outer: Some(runtime),
                    ..Scope::default()
                },
            ],
            runtime,
            global,
            current: runtime,
            program: None,
        };
        table.declare_runtime();
        table.current = global;
        table
    }

    /// readc/readi/writei/writec/writeln
    fn declare_runtime(&mut self) {
        let builtin = Span::default();

        let readc = self.create_function("readc", builtin);
        self.set_return_type(readc, Type::Char);
        self.declare(readc);

        let readi = self.create_function("readi", builtin);
        self.set_return_type(readi, Type::Int);
        self.declare(readi);

        for (name, param, ty) in [("writei", "i", Type::Int), ("writec", "ch", Type::Char)] {
            let proc = self.create_procedure(name, builtin);
            self.declare(proc);
            self.enter_block_of(proc);
            let param = self.create_parameter(param, builtin, ty, ParamMode::Value, proc);
            self.declare(param);
            self.exit_block();
        }

        let writeln = self.create_procedure("writeln", builtin);
        self.declare(writeln);
    }

    // --- 3. 对象与作用域的创建 ---

    fn alloc(&mut self, name: &str, span: Span, kind: ObjectKind) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(Object {
            name: name.to_string(),
            span,
            kind,
        });
        id
    }

    /// 新建一个属于 `owner` 的作用域，外层是当前作用域。
    fn new_scope(&mut self, owner: ObjectId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            owner: Some(owner),
            outer: Some(self.current),
            ..Scope::default()
        });
        id
    }

    pub fn create_program(&mut self, name: &str, span: Span) -> ObjectId {
        let scope = self.new_scope(ObjectId(self.objects.len()));
        let id = self.alloc(name, span, ObjectKind::Program { scope });
        self.program = Some(id);
        id
    }

    pub fn create_function(&mut self, name: &str, span: Span) -> ObjectId {
        let scope = self.new_scope(ObjectId(self.objects.len()));
        self.alloc(
            name,
            span,
            ObjectKind::Function {
                params: Vec::new(),
                return_type: None,
                scope,
            },
        )
    }

    pub fn create_procedure(&mut self, name: &str, span: Span) -> ObjectId {
        let scope = self.new_scope(ObjectId(self.objects.len()));
        self.alloc(
            name,
            span,
            ObjectKind::Procedure {
                params: Vec::new(),
                scope,
            },
        )
    }

    pub fn create_constant(&mut self, name: &str, span: Span, value: ConstantValue) -> ObjectId {
        self.alloc(name, span, ObjectKind::Constant(value))
    }

    pub fn create_type(&mut self, name: &str, span: Span, ty: Type) -> ObjectId {
        self.alloc(name, span, ObjectKind::Type(ty))
    }

    pub fn create_variable(&mut self, name: &str, span: Span, ty: Type) -> ObjectId {
        self.alloc(name, span, ObjectKind::Variable(ty))
    }

    /// 创建参数，并按声明顺序挂到所属函数/过程的参数表上。
    pub fn create_parameter(
        &mut self,
        name: &str,
        span: Span,
        ty: Type,
        mode: ParamMode,
        owner: ObjectId,
    ) -> ObjectId {
        let id = self.alloc(name, span, ObjectKind::Parameter { ty, mode, owner });
        if let ObjectKind::Function { params, .. } | ObjectKind::Procedure { params, .. } =
            &mut self.objects[owner.0].kind
        {
            params.push(id);
        }
        id
    }

    pub fn set_return_type(&mut self, function: ObjectId, ty: Type) {
        if let ObjectKind::Function { return_type, .. } = &mut self.objects[function.0].kind {
            *return_type = Some(ty);
        }
    }

    /// 把对象声明进当前作用域。重名检查由 [`Self::check_fresh_ident`] 事先完成。
    pub fn declare(&mut self, id: ObjectId) {
        let name = self.objects[id.0].name.clone();
        debug!(name = %name, kind = %self.objects[id.0].kind, scope = self.current.0, "declare");
        let scope = &mut self.scopes[self.current.0];
        scope.objects.push(id);
        scope.names.insert(name, id);
    }

    pub fn enter_block(&mut self, scope: ScopeId) {
        debug!(scope = scope.0, "enter scope");
        self.current = scope;
    }

    /// 进入程序/函数/过程自己的作用域。
    pub fn enter_block_of(&mut self, owner: ObjectId) {
        if let Some(scope) = self.objects[owner.0].kind.scope() {
            self.enter_block(scope);
        }
    }

    /// 回到外层作用域；全局作用域是解析器能退到的最外层。
    pub fn exit_block(&mut self) {
        if self.current == self.global {
            return;
        }
        if let Some(outer) = self.scopes[self.current.0].outer {
            debug!(scope = self.current.0, "exit scope");
            self.current = outer;
        }
    }

    // --- 4. 查找 ---

    /// 从当前作用域开始，逐层向外查找；找到的第一个即为可见的那个。
    pub fn lookup(&self, name: &str) -> Option<ObjectId> {
        let mut scope = Some(self.current);
        while let Some(id) = scope {
            let s = &self.scopes[id.0];
            if let Some(found) = s.find(name) {
                return Some(found);
            }
            scope = s.outer;
        }
        None
    }

    fn lookup_object(&self, name: &str) -> Option<&Object> {
        self.lookup(name).map(|id| self.object(id))
    }

    // --- 5. 语义检查 ---
    // 种类不对与找不到报告同一个错误码。

    /// 名字在**当前**作用域中必须是新的；遮蔽外层声明是允许的。
    pub fn check_fresh_ident(&self, name: &str, span: Span) -> CompileResult<()> {
        match self.scopes[self.current.0].find(name) {
            Some(_) => Err(CompileError::new(
                ErrorKind::DuplicateIdent {
                    name: name.to_string(),
                },
                span,
            )),
            None => Ok(()),
        }
    }

    pub fn check_declared_ident(&self, name: &str, span: Span) -> CompileResult<ObjectId> {
        self.lookup(name)
            .ok_or_else(|| CompileError::new(ErrorKind::UndeclaredIdent { name: name.to_string() }, span))
    }

    /// 返回常量值的副本。
    pub fn check_declared_constant(&self, name: &str, span: Span) -> CompileResult<ConstantValue> {
        match self.lookup_object(name) {
            Some(Object {
                kind: ObjectKind::Constant(value),
                ..
            }) => Ok(*value),
            _ => Err(CompileError::new(ErrorKind::UndeclaredConstant { name: name.to_string() }, span)),
        }
    }

    /// 返回类型对象背后的实际类型。
    pub fn check_declared_type(&self, name: &str, span: Span) -> CompileResult<Type> {
        match self.lookup_object(name) {
            Some(Object {
                kind: ObjectKind::Type(ty),
                ..
            }) => Ok(ty.clone()),
            _ => Err(CompileError::new(ErrorKind::UndeclaredType { name: name.to_string() }, span)),
        }
    }

    /// 变量或参数。
    pub fn check_declared_variable(&self, name: &str, span: Span) -> CompileResult<ObjectId> {
        match self.lookup(name) {
            Some(id) if self.object(id).kind.storage_type().is_some() => Ok(id),
            _ => Err(CompileError::new(ErrorKind::UndeclaredVariable { name: name.to_string() }, span)),
        }
    }

    pub fn check_declared_function(&self, name: &str, span: Span) -> CompileResult<ObjectId> {
        match self.lookup(name) {
            Some(id) if matches!(self.object(id).kind, ObjectKind::Function { .. }) => Ok(id),
            _ => Err(CompileError::new(ErrorKind::UndeclaredFunction { name: name.to_string() }, span)),
        }
    }

    pub fn check_declared_procedure(&self, name: &str, span: Span) -> CompileResult<ObjectId> {
        match self.lookup(name) {
            Some(id) if matches!(self.object(id).kind, ObjectKind::Procedure { .. }) => Ok(id),
            _ => Err(CompileError::new(ErrorKind::UndeclaredProcedure { name: name.to_string() }, span)),
        }
    }

    /// 赋值左值：变量、参数，或者正在定义的那个函数本身（给它赋值即设置返回值）。
    pub fn check_declared_lvalue(&self, name: &str, span: Span) -> CompileResult<ObjectId> {
        let id = self.check_declared_ident(name, span)?;
        match self.object(id).kind {
            ObjectKind::Variable(_) | ObjectKind::Parameter { .. } => Ok(id),
            ObjectKind::Function { .. } if self.scopes[self.current.0].owner == Some(id) => Ok(id),
            _ => Err(CompileError::new(ErrorKind::UndeclaredIdent { name: name.to_string() }, span)),
        }
    }

    // --- 6. 访问器 ---

    pub fn object(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    pub fn current_scope(&self) -> ScopeId {
        self.current
    }

    pub fn global_scope(&self) -> ScopeId {
        self.global
    }

    pub fn runtime_scope(&self) -> ScopeId {
        self.runtime
    }

    /// 已经创建的程序对象。
    pub fn program(&self) -> Option<ObjectId> {
        self.program
    }

    /// 在某个作用域里（不向外）按名字找对象，方便检查解析结果。
    pub fn find_in(&self, scope: ScopeId, name: &str) -> Option<&Object> {
        self.scopes[scope.0].find(name).map(|id| self.object(id))
    }
}
