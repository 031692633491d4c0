use pretty_assertions::assert_eq;
use tests::{
    fixture::{self, SOURCE_BUILDING, SOURCE_MANDATOR},
    seed, setup, setup_with,
    views::{names, CoreBuilding, OpsBuilder, OpsTenant},
};
use tokio_stream::StreamExt;
use vista::{
    schema::source::ModelId,
    stmt::{Params, Value},
    Db,
};

fn source_id(db: &Db, name: &str) -> ModelId {
    db.schema().source.model_by_name(name).unwrap().id
}

fn sorted(mut ids: Vec<ModelId>) -> Vec<ModelId> {
    ids.sort();
    ids
}

// --- streaming ---

#[tokio::test]
async fn stream_yields_the_same_results_as_all() {
    let test = setup().await;
    let options = vista_query::parse("$orderby=Name desc&$expand=Builder").unwrap();

    let all = test
        .db
        .all::<CoreBuilding>(SOURCE_BUILDING, &options, Params::new())
        .await
        .unwrap();

    let stream = test
        .db
        .stream::<CoreBuilding>(SOURCE_BUILDING, &options, Params::new());
    tokio::pin!(stream);

    let mut streamed = vec![];
    while let Some(building) = stream.next().await {
        streamed.push(building.unwrap());
    }

    assert_eq!(streamed, all);
    assert_eq!(names(&streamed), ["Two L2", "Two L1", "One L2", "One L1"]);
}

#[tokio::test]
async fn stream_reports_translation_errors() {
    let test = setup().await;
    let options = vista_query::parse("$filter=Colour eq 'red'").unwrap();

    let stream = test
        .db
        .stream::<CoreBuilding>(SOURCE_BUILDING, &options, Params::new());
    tokio::pin!(stream);

    let err = stream.next().await.unwrap().unwrap_err();
    assert!(err.is_unmapped_property());
    assert!(stream.next().await.is_none());
}

// --- inserting ---

#[tokio::test]
async fn inserted_rows_are_visible() {
    let test = setup().await;

    let count = test
        .db
        .insert(
            SOURCE_BUILDING,
            [seed::building(
                uuid::Uuid::from_u128(0x0b11_0000_0000_0000_0000_0000_0000_0013),
                "One L3",
                seed::JOHN,
                seed::TENANT_ONE,
            )],
        )
        .await
        .unwrap();

    assert_eq!(count, 1);
    assert_eq!(test.log.inserts(), 1);

    let options = vista_query::parse("$filter=Name eq 'One'&$expand=Buildings").unwrap();
    let tenants = test
        .db
        .all::<OpsTenant>(SOURCE_MANDATOR, &options, Params::new())
        .await
        .unwrap();

    assert_eq!(
        names(&tenants[0].buildings),
        ["One L1", "One L2", "One L3"]
    );
}

#[tokio::test]
async fn insert_into_unknown_model() {
    let test = setup().await;

    let err = test
        .db
        .insert("TNope", [seed::city(9, "Nowhere")])
        .await
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert!(test.log.is_empty());
}

// --- translation ---

#[tokio::test]
async fn translate_names_both_models() {
    let test = setup().await;
    let options = vista_query::parse("$top=1").unwrap();

    let query = test
        .db
        .translate(SOURCE_BUILDING, "CoreBuilding", &options, Params::new())
        .unwrap();

    let schema = test.db.schema();
    assert_eq!(query.source, source_id(&test.db, SOURCE_BUILDING));
    assert_eq!(
        query.view,
        schema.view.model_by_name("CoreBuilding").unwrap().id
    );

    // Translating does not touch the driver
    assert!(test.log.is_empty());
}

#[tokio::test]
async fn translated_query_can_run_later() {
    let test = setup().await;
    let options = vista_query::parse("$filter=Name eq 'Two'").unwrap();

    let query = test
        .db
        .translate(SOURCE_MANDATOR, "OpsTenant", &options, Params::new())
        .unwrap();

    let records = test.db.exec(&query).await.unwrap().collect().await.unwrap();
    assert_eq!(records.len(), 1);

    let Value::Record(record) = &records[0] else {
        panic!("expected a record, got {:?}", records[0]);
    };
    assert_eq!(record[1], Value::from("Two"));
    assert_eq!(record[2], Value::List(vec![]));
}

#[tokio::test]
async fn schema_from_config_behaves_like_the_builder() {
    let built = setup().await;
    let configured = setup_with(fixture::schema_from_json()).await;

    let queries = [
        "$top=5&$expand=Builder($expand=City),Tenant&$filter=Builder/Name eq 'Sam'&$orderby=Name desc",
        "$filter=BuilderName ne 'Mark'&$orderby=BuilderName,Name",
        "$expand=Tenant($expand=Buildings($orderby=Name desc;$top=1))",
    ];

    for query in queries {
        let options = vista_query::parse(query).unwrap();
        let params = Params::new().with(fixture::PARAMETER, "p");

        let lhs = built
            .db
            .translate(SOURCE_BUILDING, "CoreBuilding", &options, params.clone())
            .unwrap();
        let rhs = configured
            .db
            .translate(SOURCE_BUILDING, "CoreBuilding", &options, params.clone())
            .unwrap();
        assert_eq!(lhs, rhs, "{query}");

        let lhs = built
            .db
            .all::<CoreBuilding>(SOURCE_BUILDING, &options, params.clone())
            .await
            .unwrap();
        let rhs = configured
            .db
            .all::<CoreBuilding>(SOURCE_BUILDING, &options, params)
            .await
            .unwrap();
        assert_eq!(lhs, rhs, "{query}");
    }
}

// --- driver traffic ---

#[tokio::test]
async fn only_touched_models_are_scanned() {
    let test = setup().await;

    let options = vista_query::parse("$orderby=Name").unwrap();
    test.db
        .all::<OpsTenant>(SOURCE_MANDATOR, &options, Params::new())
        .await
        .unwrap();

    assert_eq!(test.log.scanned(), [source_id(&test.db, SOURCE_MANDATOR)]);
    test.log.clear();

    let options = vista_query::parse("$orderby=Name&$expand=Buildings").unwrap();
    test.db
        .all::<OpsTenant>(SOURCE_MANDATOR, &options, Params::new())
        .await
        .unwrap();

    // `CoreBuilding.BuilderName` is flattened from `Builder/Name`
    assert_eq!(
        sorted(test.log.scanned()),
        sorted(vec![
            source_id(&test.db, fixture::SOURCE_BUILDER),
            source_id(&test.db, SOURCE_MANDATOR),
            source_id(&test.db, SOURCE_BUILDING),
        ])
    );
}

#[tokio::test]
async fn expanding_a_view_without_flattened_members() {
    let test = setup().await;

    let options = vista_query::parse("$expand=City").unwrap();
    test.db
        .all::<OpsBuilder>(fixture::SOURCE_BUILDER, &options, Params::new())
        .await
        .unwrap();

    assert_eq!(
        sorted(test.log.scanned()),
        sorted(vec![
            source_id(&test.db, fixture::SOURCE_CITY),
            source_id(&test.db, fixture::SOURCE_BUILDER),
        ])
    );
    test.log.clear();

    let options = vista_query::parse("$orderby=Name").unwrap();
    test.db
        .all::<OpsBuilder>(fixture::SOURCE_BUILDER, &options, Params::new())
        .await
        .unwrap();

    assert_eq!(test.log.scanned(), [source_id(&test.db, fixture::SOURCE_BUILDER)]);
}

#[tokio::test]
async fn filter_navigation_scans_joined_models() {
    let test = setup().await;

    let options = vista_query::parse("$filter=Builder/City/Name eq 'Leeds'").unwrap();
    test.db
        .all::<CoreBuilding>(SOURCE_BUILDING, &options, Params::new())
        .await
        .unwrap();

    assert_eq!(
        sorted(test.log.scanned()),
        sorted(vec![
            source_id(&test.db, fixture::SOURCE_CITY),
            source_id(&test.db, fixture::SOURCE_BUILDER),
            source_id(&test.db, SOURCE_BUILDING),
        ])
    );
}

#[tokio::test]
async fn flattened_member_scans_its_relation() {
    let test = setup().await;

    let options = vista_query::parse("$orderby=BuilderName").unwrap();
    test.db
        .all::<CoreBuilding>(SOURCE_BUILDING, &options, Params::new())
        .await
        .unwrap();

    assert_eq!(
        sorted(test.log.scanned()),
        sorted(vec![
            source_id(&test.db, fixture::SOURCE_BUILDER),
            source_id(&test.db, SOURCE_BUILDING),
        ])
    );
}
