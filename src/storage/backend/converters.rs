use crate::storage::UrlRecord;
use migration::entities::url;

/// 将 Sea-ORM Model 转换为 UrlRecord
pub fn model_to_record(model: url::Model) -> UrlRecord {
    UrlRecord {
        id: model.id,
        short_path: model.short_path,
        destination: model.destination,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
        expires_at: model.expires_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// 将 UrlRecord 转换为 ActiveModel
///
/// 新建时写入全部字段；更新时 id 和 created_at 保持 Unchanged，不出现在 UPDATE 语句中。
pub fn record_to_active_model(record: &UrlRecord, is_new: bool) -> url::ActiveModel {
    use sea_orm::ActiveValue::*;

    url::ActiveModel {
        id: if is_new {
            Set(record.id)
        } else {
            Unchanged(record.id)
        },
        short_path: Set(record.short_path.clone()),
        destination: Set(record.destination.clone()),
        title: Set(record.title.clone()),
        description: Set(record.description.clone()),
        image_url: Set(record.image_url.clone()),
        expires_at: Set(record.expires_at),
        created_at: if is_new {
            Set(record.created_at)
        } else {
            Unchanged(record.created_at)
        },
        updated_at: Set(record.updated_at),
    }
}
