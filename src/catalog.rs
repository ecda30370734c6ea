// src/catalog.rs — 表情目录：解析 single.csv / combos.csv，缺失时降级到内置数据

use crate::error::CatalogError;
use crate::fallback::{FALLBACK_COMBINATIONS, FALLBACK_DESCRIPTIONS, FALLBACK_SINGLES};
use std::collections::HashMap;
use std::path::Path;

pub const SINGLE_CSV: &str = "single.csv";
pub const COMBOS_CSV: &str = "combos.csv";

/// 未收录描述时的占位文字
pub const UNKNOWN_DESCRIPTION: &str = "A unique emoji symbol";

/// 多表情组合（combos.csv 的一行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub name: String,
    pub emojis: String,
}

impl Combination {
    pub fn new(name: impl Into<String>, emojis: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emojis: emojis.into(),
        }
    }
}

/// single.csv 的解析结果：描述表 + 首次出现顺序
#[derive(Debug, Clone, Default)]
pub struct Descriptions {
    pub map: HashMap<String, String>,
    pub order: Vec<String>,
}

impl Descriptions {
    pub fn insert(&mut self, emoji: String, description: String) {
        if !self.map.contains_key(&emoji) {
            self.order.push(emoji.clone());
        }
        // 重复的键：后出现的描述覆盖前者，位置不变
        self.map.insert(emoji, description);
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}

// ── CSV 行解析 ───────────────────────────────────────────────

/// 拆分一行 CSV。
///
/// 引号 `"` 切换"引号内"状态；若紧跟另一个 `"` 则输出一个字面量 `"`，
/// 不切换状态（第二个引号随后按普通规则处理）。引号外的 `,` 结束当前字段，
/// 行尾结束最后一个字段。
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if chars.peek() == Some(&'"') => current.push('"'),
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// 逐行解析，跳过表头、空行与字段不足 2 个的行，返回前两个字段（已 trim）
fn rows(text: &str) -> impl Iterator<Item = (String, String)> + '_ {
    text.lines().skip(1).filter(|l| !l.is_empty()).filter_map(|line| {
        let mut fields = parse_csv_line(line).into_iter();
        match (fields.next(), fields.next()) {
            (Some(a), Some(b)) => Some((a.trim().to_string(), b.trim().to_string())),
            _ => None,
        }
    })
}

pub fn parse_descriptions(text: &str) -> Descriptions {
    let mut out = Descriptions::default();
    for (emoji, description) in rows(text) {
        out.insert(emoji, description);
    }
    out
}

pub fn parse_combinations(text: &str) -> Vec<Combination> {
    rows(text)
        .map(|(name, emojis)| Combination { name, emojis })
        .collect()
}

// ── 文件加载（失败不致命，返回空结构） ───────────────────────

fn read_resource(path: &Path) -> Result<String, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_descriptions(path: &Path) -> Descriptions {
    match read_resource(path) {
        Ok(text) => {
            let d = parse_descriptions(&text);
            tracing::info!("从 {} 载入 {} 条表情描述", path.display(), d.len());
            d
        }
        Err(e) => {
            tracing::warn!("{e}");
            Descriptions::default()
        }
    }
}

pub fn load_combinations(path: &Path) -> Vec<Combination> {
    match read_resource(path) {
        Ok(text) => {
            let c = parse_combinations(&text);
            tracing::info!("从 {} 载入 {} 个表情组合", path.display(), c.len());
            c
        }
        Err(e) => {
            tracing::warn!("{e}");
            Vec::new()
        }
    }
}

// ── Catalog ──────────────────────────────────────────────────

/// 启动时构造一次，之后只读
#[derive(Debug, Clone)]
pub struct Catalog {
    descriptions: Descriptions,
    combinations: Vec<Combination>,
    /// 描述表是否来自 CSV（决定 description_for 的查找顺序）
    loaded_descriptions: bool,
}

impl Catalog {
    /// 从资源目录载入 single.csv 与 combos.csv
    pub fn load(resource_dir: &Path) -> Self {
        let descriptions = load_descriptions(&resource_dir.join(SINGLE_CSV));
        let combinations = load_combinations(&resource_dir.join(COMBOS_CSV));
        Self::from_parts(descriptions, combinations)
    }

    /// 两类数据各自独立降级：为空则换成内置数据
    pub fn from_parts(descriptions: Descriptions, combinations: Vec<Combination>) -> Self {
        let loaded_descriptions = !descriptions.is_empty();
        let descriptions = if loaded_descriptions {
            descriptions
        } else {
            tracing::debug!("使用内置单表情数据");
            builtin_descriptions()
        };

        let combinations = if combinations.is_empty() {
            tracing::debug!("使用内置组合数据");
            FALLBACK_COMBINATIONS
                .iter()
                .map(|(n, e)| Combination::new(*n, *e))
                .collect()
        } else {
            combinations
        };

        Self {
            descriptions,
            combinations,
            loaded_descriptions,
        }
    }

    /// 纯内置目录
    pub fn builtin() -> Self {
        Self::from_parts(Descriptions::default(), Vec::new())
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn single_emojis(&self) -> &[String] {
        &self.descriptions.order
    }

    pub fn descriptions(&self) -> &HashMap<String, String> {
        &self.descriptions.map
    }

    /// 单个表情的描述；已载入 CSV 时只查 CSV
    pub fn description_for(&self, emoji: &str) -> &str {
        if self.loaded_descriptions {
            return self
                .descriptions
                .map
                .get(emoji)
                .map(String::as_str)
                .unwrap_or(UNKNOWN_DESCRIPTION);
        }
        FALLBACK_DESCRIPTIONS
            .iter()
            .find(|(e, _)| *e == emoji)
            .map(|(_, d)| *d)
            .unwrap_or(UNKNOWN_DESCRIPTION)
    }

    /// 名称忽略大小写匹配，或表情串原样包含；空查询返回全部
    pub fn search_combinations(&self, query: &str) -> Vec<&Combination> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.combinations.iter().collect();
        }
        self.combinations
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle) || c.emojis.contains(query))
            .collect()
    }
}

/// 内置表情池；描述表覆盖不到的表情用占位文字
fn builtin_descriptions() -> Descriptions {
    let mut d = Descriptions::default();
    for emoji in FALLBACK_SINGLES {
        let description = FALLBACK_DESCRIPTIONS
            .iter()
            .find(|(e, _)| e == emoji)
            .map_or(UNKNOWN_DESCRIPTION, |(_, desc)| *desc);
        d.insert(emoji.to_string(), description.to_string());
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_is_kept_inside_field() {
        let d = parse_descriptions("emoji,description\n📶,\"Antenna, Bars\"\n");
        assert_eq!(d.len(), 1);
        assert_eq!(d.map.get("📶").map(String::as_str), Some("Antenna, Bars"));
    }

    #[test]
    fn csv_line_splits_fields_and_unescapes_quotes() {
        assert_eq!(parse_csv_line("a, b ,c"), vec!["a", " b ", "c"]);
        assert_eq!(
            parse_csv_line(r#"🚀,"say ""hi"", ok""#),
            vec!["🚀", r#"say "hi", ok"#]
        );
    }

    #[test]
    fn header_blank_and_short_rows_are_skipped() {
        let text = "name,emojis\n\nTech Hub, 💻📶🌐 \nlonely\n\"Space, Station\",🚀🛰️\n";
        let combos = parse_combinations(text);
        assert_eq!(
            combos,
            vec![
                Combination::new("Tech Hub", "💻📶🌐"),
                Combination::new("Space, Station", "🚀🛰️"),
            ]
        );
    }

    #[test]
    fn duplicate_keys_keep_first_position() {
        let d = parse_descriptions("emoji,description\n🔥,Fire\n⚡,Volt\n🔥,Hot\n");
        assert_eq!(d.order, vec!["🔥", "⚡"]);
        assert_eq!(d.map["🔥"], "Hot");
    }

    #[test]
    fn missing_resources_fall_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load(dir.path());
        assert!(!catalog.combinations().is_empty());
        assert!(!catalog.single_emojis().is_empty());
        assert_eq!(catalog.description_for("🚀"), "Rocket");
        assert_eq!(catalog.description_for("🫠"), UNKNOWN_DESCRIPTION);
    }

    #[test]
    fn loaded_resources_replace_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SINGLE_CSV), "emoji,description\n🦀,Crab\n").unwrap();
        std::fs::write(dir.path().join(COMBOS_CSV), "name,emojis\nRusty,🦀⚙️\n").unwrap();

        let catalog = Catalog::load(dir.path());
        assert_eq!(catalog.single_emojis(), ["🦀".to_string()]);
        assert_eq!(catalog.combinations(), [Combination::new("Rusty", "🦀⚙️")]);
        // CSV 已载入时不再查内置描述
        assert_eq!(catalog.description_for("🚀"), UNKNOWN_DESCRIPTION);
        assert_eq!(catalog.description_for("🦀"), "Crab");
    }

    #[test]
    fn empty_file_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(COMBOS_CSV), "name,emojis\n").unwrap();
        let catalog = Catalog::load(dir.path());
        assert_eq!(catalog.combinations().len(), FALLBACK_COMBINATIONS.len());
    }

    #[test]
    fn search_matches_name_case_insensitively_or_emojis() {
        let catalog = Catalog::builtin();
        let hits = catalog.search_combinations("  rocket ");
        assert!(hits.iter().any(|c| c.name == "Rocket WiFi"));
        assert!(hits.iter().all(|c| c.name.to_lowercase().contains("rocket")));

        let by_emoji = catalog.search_combinations("🍕🍕");
        assert_eq!(by_emoji.len(), 1);
        assert_eq!(by_emoji[0].name, "Pizza WiFi");

        assert_eq!(catalog.search_combinations("").len(), catalog.combinations().len());
    }

    #[test]
    fn doubled_quote_leaves_second_quote_as_toggle() {
        // 第二个引号不被吞掉，仍会切换引号状态
        assert_eq!(parse_csv_line("\"\"\"\""), vec!["\"\"\""]);
        // 于是后面的逗号落在引号内，不再分隔字段
        assert_eq!(parse_csv_line("x\"\"y,z"), vec!["x\"y,z"]);
    }

    #[test]
    fn builtin_combinations_carry_full_table() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.combinations().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 71);
        assert_eq!(names.first(), Some(&"Tech Hub"));
        assert_eq!(names.last(), Some(&"Clear Zone"));
        for name in ["Shadow Network", "Dark Vader", "Joy Zone", "Weather Hub", "Pure Network"] {
            assert!(names.contains(&name), "{name}");
        }
    }
}
