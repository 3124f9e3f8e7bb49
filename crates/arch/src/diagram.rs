//! 图结构 - 由架构图构建的语句序列，各格式的渲染器只负责打印

use std::collections::{HashMap, HashSet};

use memory::{Graph, Keyed, Person, Relationship, System};

/// 元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Person,
    System,
    ExternalSystem,
}

/// 元素声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    /// DSL 安全的标识符
    pub id: String,
    pub label: String,
    /// 可能为空
    pub description: String,
}

/// 有向边
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Declare(Element),
    Connect(Edge),
}

/// 待渲染的图：先 People，再 Systems，最后 Relationships
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    statements: Vec<Statement>,
}

impl Diagram {
    pub fn new(
        systems: &Keyed<System>,
        people: &Keyed<Person>,
        relationships: &[Relationship],
    ) -> Self {
        let mut statements = Vec::with_capacity(systems.len() + people.len() + relationships.len());
        let mut ids = IdMap::default();

        for (key, person) in people.iter() {
            statements.push(Statement::Declare(Element {
                kind: ElementKind::Person,
                id: ids.declare(key),
                label: person.label.clone(),
                description: person.description.clone(),
            }));
        }

        for (key, system) in systems.iter() {
            let kind = if system.external {
                ElementKind::ExternalSystem
            } else {
                ElementKind::System
            };
            statements.push(Statement::Declare(Element {
                kind,
                id: ids.declare(key),
                label: system.label.clone(),
                description: system.description.clone(),
            }));
        }

        for rel in relationships {
            statements.push(Statement::Connect(Edge {
                from: ids.resolve(&rel.from),
                to: ids.resolve(&rel.to),
                label: rel.label.clone(),
            }));
        }

        Self { statements }
    }

    pub fn from_graph(graph: &Graph) -> Self {
        Self::new(&graph.systems, &graph.people, &graph.relationships)
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Declare(e) => Some(e),
            Statement::Connect(_) => None,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Connect(e) => Some(e),
            Statement::Declare(_) => None,
        })
    }

    pub fn has_elements(&self) -> bool {
        self.elements().next().is_some()
    }

    pub fn has_edges(&self) -> bool {
        self.edges().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// key -> 标识符
    ///
    /// 只保留 `[A-Za-z0-9_]`，其余字符替换为 `_`；数字开头时补 `_` 前缀。
    #[doc(hidden)]
    pub fn node_id(name: &str) -> String {
        let mut id: String = name
            .replace("::", "_")
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        if id.is_empty() || id.starts_with(|c: char| c.is_ascii_digit()) {
            id.insert(0, '_');
        }
        id
    }
}

/// key -> 唯一标识符
///
/// 不同 key 清洗后相同时追加数字后缀 (`end_user`, `end_user_2`)。
/// 先声明的元素优先拿到原始标识符，边的端点按 key 查表，悬空 key 也分配标识符。
#[derive(Default)]
struct IdMap {
    by_key: HashMap<String, String>,
    taken: HashSet<String>,
}

impl IdMap {
    /// 为声明分配新的标识符；同一 key 已被占用时 (人和系统同名) 也分配新的
    fn declare(&mut self, key: &str) -> String {
        let base = Diagram::node_id(key);
        let mut id = base.clone();
        let mut n = 2;
        while self.taken.contains(&id) {
            id = format!("{}_{}", base, n);
            n += 1;
        }
        self.taken.insert(id.clone());
        self.by_key.entry(key.to_string()).or_insert_with(|| id.clone());
        id
    }

    fn resolve(&mut self, key: &str) -> String {
        match self.by_key.get(key) {
            Some(id) => id.clone(),
            None => self.declare(key),
        }
    }
}
