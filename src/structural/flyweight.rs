//! Flyweight: share the heavy, repeated part of many objects through a
//! factory; keep only the unique part per object.

use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{PatternError, Result};
use crate::output;

// ============================================================================
// Example: Flyweight Pattern - Cars in a Police Database
// ============================================================================

/// Shared (intrinsic) state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarModel {
    pub brand: String,
    pub model: String,
    pub color: String,
}

impl CarModel {
    pub fn new(brand: &str, model: &str, color: &str) -> Self {
        Self {
            brand: brand.to_string(),
            model: model.to_string(),
            color: color.to_string(),
        }
    }

    fn key(&self) -> String {
        [self.brand.as_str(), self.model.as_str(), self.color.as_str()].join("_")
    }
}

/// Unique (extrinsic) state, supplied by the caller on every use.
#[derive(Debug, Clone, Serialize)]
pub struct Registration<'a> {
    pub plates: &'a str,
    pub owner: &'a str,
}

#[derive(Debug)]
pub struct Flyweight {
    shared: CarModel,
}

impl Flyweight {
    pub fn operation(&self, unique: &Registration<'_>) -> Result<String> {
        Ok(format!(
            "Flyweight: Displaying shared ({}) and unique ({}) state.",
            serde_json::to_string(&self.shared)?,
            serde_json::to_string(unique)?
        ))
    }
}

#[derive(Debug, Default)]
pub struct FlyweightFactory {
    flyweights: HashMap<String, Rc<Flyweight>>,
    order: Vec<String>,
}

impl FlyweightFactory {
    pub fn new(initial: Vec<CarModel>) -> Self {
        let mut factory = Self::default();
        for shared in initial {
            factory.insert(shared);
        }
        factory
    }

    fn insert(&mut self, shared: CarModel) -> Rc<Flyweight> {
        let key = shared.key();
        let flyweight = Rc::new(Flyweight { shared });
        self.order.push(key.clone());
        self.flyweights.insert(key, Rc::clone(&flyweight));
        flyweight
    }

    /// Returns the flyweight plus the factory's remark about reuse.
    pub fn flyweight(&mut self, shared: CarModel) -> (Rc<Flyweight>, &'static str) {
        if let Some(existing) = self.flyweights.get(&shared.key()) {
            return (
                Rc::clone(existing),
                "FlyweightFactory: Reusing existing flyweight.",
            );
        }
        (
            self.insert(shared),
            "FlyweightFactory: Can't find a flyweight, creating new one.",
        )
    }

    pub fn len(&self) -> usize {
        self.flyweights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flyweights.is_empty()
    }

    pub fn list_flyweights(&self) -> Vec<String> {
        let mut lines = vec![format!("FlyweightFactory: I have {} flyweights:", self.len())];
        lines.extend(self.order.iter().cloned());
        lines
    }
}

pub fn add_car_to_police_database(
    factory: &mut FlyweightFactory,
    plates: &str,
    owner: &str,
    car: CarModel,
) -> Result<Vec<String>> {
    let (flyweight, remark) = factory.flyweight(car);
    Ok(vec![
        "Client: Adding a car to database.".to_string(),
        remark.to_string(),
        flyweight.operation(&Registration { plates, owner })?,
    ])
}

pub fn concept_example() -> Result<Vec<String>> {
    let mut factory = FlyweightFactory::new(vec![
        CarModel::new("Chevrolet", "Camaro2018", "pink"),
        CarModel::new("Mercedes Benz", "C300", "black"),
        CarModel::new("Mercedes Benz", "C500", "red"),
        CarModel::new("BMW", "M5", "red"),
        CarModel::new("BMW", "X6", "white"),
    ]);

    let mut lines = factory.list_flyweights();
    lines.push(String::new());
    lines.extend(add_car_to_police_database(
        &mut factory,
        "CL234IR",
        "James Doe",
        CarModel::new("BMW", "M5", "red"),
    )?);
    lines.push(String::new());
    lines.extend(add_car_to_police_database(
        &mut factory,
        "CL234IR",
        "James Doe",
        CarModel::new("BMW", "X1", "red"),
    )?);
    lines.push(String::new());
    lines.extend(factory.list_flyweights());
    Ok(lines)
}

// ============================================================================
// Example: Forest Simulation
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct TreeType {
    pub name: String,
    pub color: String,
    pub texture: String,
}

impl TreeType {
    pub fn render(&self, x: i32, y: i32) -> String {
        format!(
            "Rendering a tree of type {} at ({x}, {y}) with color {} and texture {}.",
            self.name, self.color, self.texture
        )
    }
}

#[derive(Debug, Default)]
pub struct TreeFactory {
    tree_types: HashMap<(String, String, String), Rc<TreeType>>,
}

impl TreeFactory {
    pub fn tree_type(&mut self, name: &str, color: &str, texture: &str) -> Rc<TreeType> {
        let key = (name.to_string(), color.to_string(), texture.to_string());
        Rc::clone(self.tree_types.entry(key).or_insert_with(|| {
            Rc::new(TreeType {
                name: name.to_string(),
                color: color.to_string(),
                texture: texture.to_string(),
            })
        }))
    }

    pub fn len(&self) -> usize {
        self.tree_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree_types.is_empty()
    }
}

struct Tree {
    x: i32,
    y: i32,
    tree_type: Rc<TreeType>,
}

#[derive(Default)]
pub struct Forest {
    trees: Vec<Tree>,
    factory: TreeFactory,
}

impl Forest {
    pub fn plant_tree(&mut self, x: i32, y: i32, name: &str, color: &str, texture: &str) {
        let tree_type = self.factory.tree_type(name, color, texture);
        self.trees.push(Tree { x, y, tree_type });
    }

    pub fn render(&self) -> Vec<String> {
        self.trees
            .iter()
            .map(|tree| tree.tree_type.render(tree.x, tree.y))
            .collect()
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn tree_type_count(&self) -> usize {
        self.factory.len()
    }
}

pub fn forest_example() -> Vec<String> {
    let mut forest = Forest::default();
    forest.plant_tree(0, 0, "Oak", "green", "rough");
    forest.plant_tree(1, 1, "Birch", "white", "smooth");
    forest.plant_tree(5, 5, "Oak", "green", "rough");
    forest.plant_tree(10, 10, "Pine", "dark green", "needle-like");

    let mut lines = vec!["Rendering forest:".to_string()];
    lines.extend(forest.render());
    lines.push(format!(
        "{} trees share {} tree types.",
        forest.tree_count(),
        forest.tree_type_count()
    ));
    lines
}

// ============================================================================
// Example: Cat Database Loaded From CSV
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct CatVariation {
    pub breed: String,
    pub image: String,
    pub color: String,
    pub texture: String,
    pub fur: String,
    pub size: String,
}

impl CatVariation {
    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "breed" => Some(self.breed.as_str()),
            "image" => Some(self.image.as_str()),
            "color" => Some(self.color.as_str()),
            "texture" => Some(self.texture.as_str()),
            "fur" => Some(self.fur.as_str()),
            "size" => Some(self.size.as_str()),
            _ => None,
        }
    }

    pub fn render_profile(&self, name: &str, age: &str, owner: &str) -> Vec<String> {
        vec![
            format!("= {name} ="),
            format!("Age: {age}"),
            format!("Owner: {owner}"),
            format!("Breed: {}", self.breed),
            format!("Image: {}", self.image),
            format!("Color: {}", self.color),
            format!("Texture: {}", self.texture),
        ]
    }
}

#[derive(Debug)]
pub struct Cat {
    pub name: String,
    pub age: String,
    pub owner: String,
    variation: Rc<CatVariation>,
}

impl Cat {
    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(self.name.as_str()),
            "age" => Some(self.age.as_str()),
            "owner" => Some(self.owner.as_str()),
            _ => self.variation.field(key),
        }
    }

    /// Every pair must match; a key neither the cat nor its variation has
    /// never matches.
    pub fn matches(&self, query: &[(&str, &str)]) -> bool {
        query
            .iter()
            .all(|(key, value)| self.field(key) == Some(*value))
    }

    pub fn render(&self) -> Vec<String> {
        self.variation
            .render_profile(&self.name, &self.age, &self.owner)
    }
}

/// One CSV row; headers are matched case-insensitively.
#[derive(Debug, Deserialize)]
pub struct CatRecord {
    pub name: String,
    pub age: String,
    pub owner: String,
    pub breed: String,
    pub image: String,
    pub color: String,
    pub texture: String,
    pub fur: String,
    pub size: String,
}

#[derive(Debug, Default)]
pub struct CatDatabase {
    cats: Vec<Cat>,
    variations: HashMap<String, Rc<CatVariation>>,
}

impl CatDatabase {
    pub fn add_cat(&mut self, record: CatRecord) -> String {
        let key = [
            record.breed.as_str(),
            record.image.as_str(),
            record.color.as_str(),
            record.texture.as_str(),
            record.fur.as_str(),
            record.size.as_str(),
        ]
        .join("_");

        let message = format!(
            "CatDataBase: Added a cat ({}, {}).",
            record.name, record.breed
        );
        let variation = Rc::clone(self.variations.entry(key).or_insert_with(|| {
            Rc::new(CatVariation {
                breed: record.breed,
                image: record.image,
                color: record.color,
                texture: record.texture,
                fur: record.fur,
                size: record.size,
            })
        }));

        self.cats.push(Cat {
            name: record.name,
            age: record.age,
            owner: record.owner,
            variation,
        });
        message
    }

    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PatternError::MissingFile(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers: csv::StringRecord = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        reader.set_headers(headers);

        let mut lines = Vec::new();
        for record in reader.deserialize::<CatRecord>() {
            lines.push(self.add_cat(record?));
        }
        Ok(lines)
    }

    pub fn find_cat(&self, query: &[(&str, &str)]) -> Option<&Cat> {
        self.cats.iter().find(|cat| cat.matches(query))
    }

    pub fn cat_count(&self) -> usize {
        self.cats.len()
    }

    pub fn variation_count(&self) -> usize {
        self.variations.len()
    }
}

pub fn cat_database_example(csv_path: &Path) -> Result<Vec<String>> {
    let mut db = CatDatabase::default();
    let file_name = csv_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut lines = vec![format!("Client: Let's see what we have in \"{file_name}\".")];
    lines.extend(db.load_csv(csv_path)?);
    lines.push(format!(
        "CatDataBase: {} cats share {} variations.",
        db.cat_count(),
        db.variation_count()
    ));

    for name in ["Siri", "Bob"] {
        lines.push(String::new());
        lines.push(format!("Client: Let's look for a cat named \"{name}\"."));
        match db.find_cat(&[("name", name)]) {
            Some(cat) => lines.extend(cat.render()),
            None => {
                lines.push("CatDataBase: Sorry, your query does not yield any results.".to_string())
            }
        }
    }
    Ok(lines)
}

pub fn run(cats_csv: &Path) {
    output::title("Pattern: Flyweight");

    output::section("Flyweight (Concept)");
    match concept_example() {
        Ok(lines) => output::lines(lines),
        Err(e) => output::error(e),
    }
    println!();

    output::section("Forest Simulation");
    output::lines(forest_example());
    println!();

    output::section("Cat Database");
    match cat_database_example(cats_csv) {
        Ok(lines) => output::lines(lines),
        Err(e) => output::error(e),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, breed: &str) -> CatRecord {
        CatRecord {
            name: name.to_string(),
            age: "2".to_string(),
            owner: "Owner".to_string(),
            breed: breed.to_string(),
            image: "/cat.jpg".to_string(),
            color: "Brown".to_string(),
            texture: "Stripes".to_string(),
            fur: "Short".to_string(),
            size: "Medium".to_string(),
        }
    }

    #[test]
    fn test_factory_reuses_and_creates() {
        let lines = concept_example().unwrap();
        assert_eq!(lines[0], "FlyweightFactory: I have 5 flyweights:");
        assert_eq!(lines[1], "Chevrolet_Camaro2018_pink");
        assert!(lines.contains(&"FlyweightFactory: Reusing existing flyweight.".to_string()));
        assert!(lines
            .contains(&"FlyweightFactory: Can't find a flyweight, creating new one.".to_string()));
        assert!(lines.contains(&"FlyweightFactory: I have 6 flyweights:".to_string()));
    }

    #[test]
    fn test_flyweight_operation_json() {
        let flyweight = Flyweight {
            shared: CarModel::new("BMW", "M5", "red"),
        };
        let text = flyweight
            .operation(&Registration {
                plates: "CL234IR",
                owner: "James Doe",
            })
            .unwrap();
        assert_eq!(
            text,
            r#"Flyweight: Displaying shared ({"brand":"BMW","model":"M5","color":"red"}) and unique ({"plates":"CL234IR","owner":"James Doe"}) state."#
        );
    }

    #[test]
    fn test_forest_shares_tree_types() {
        let mut forest = Forest::default();
        forest.plant_tree(0, 0, "Oak", "green", "rough");
        forest.plant_tree(5, 5, "Oak", "green", "rough");
        forest.plant_tree(1, 1, "Birch", "white", "smooth");
        assert_eq!(forest.tree_count(), 3);
        assert_eq!(forest.tree_type_count(), 2);
        assert_eq!(
            forest.render()[1],
            "Rendering a tree of type Oak at (5, 5) with color green and texture rough."
        );
    }

    #[test]
    fn test_cats_share_variation() {
        let mut db = CatDatabase::default();
        db.add_cat(record("Steve", "Bengal"));
        db.add_cat(record("Siri", "Bengal"));
        db.add_cat(record("Tom", "Persian"));
        assert_eq!(db.cat_count(), 3);
        assert_eq!(db.variation_count(), 2);
    }

    #[test]
    fn test_find_cat_queries_both_states() {
        let mut db = CatDatabase::default();
        db.add_cat(record("Siri", "Bengal"));

        assert!(db.find_cat(&[("name", "Siri"), ("breed", "Bengal")]).is_some());
        assert!(db.find_cat(&[("name", "Siri"), ("breed", "Persian")]).is_none());
        assert!(db.find_cat(&[("name", "Bob")]).is_none());
        assert!(db.find_cat(&[("whiskers", "long")]).is_none());
    }

    #[test]
    fn test_missing_csv() {
        let err = CatDatabase::default()
            .load_csv("/no/such/cats.csv")
            .unwrap_err();
        assert!(matches!(err, PatternError::MissingFile(_)));
    }
}
